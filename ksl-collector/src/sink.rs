use std::io::Write;

use ksl_core::prelude::*;

// Where records go once they've been collected.  The binary writes JSON lines to stdout; anything
// that wants records in some other shape or place implements this.
pub trait RecordSink {
    fn emit(&mut self, record: &NormalizedRecord) -> EmptyResult;

    fn flush(&mut self) -> EmptyResult {
        Ok(())
    }
}

pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> JsonLinesSink<W> {
        JsonLinesSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn emit(&mut self, record: &NormalizedRecord) -> EmptyResult {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> EmptyResult {
        self.out.flush()?;
        Ok(())
    }
}
