use std::io;

use tracing_subscriber::fmt::format::FmtSpan;

// Collected records are written to stdout, so diagnostics always go to stderr to keep the two
// streams separable by the downstream log shipper.
pub fn setup(env_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::NEW)
        .with_target(false)
        .with_env_filter(env_filter)
        .compact()
        .init();
}
