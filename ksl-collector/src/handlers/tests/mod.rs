mod node_test;
mod pod_test;
mod workloads_test;

use assertables::*;
use clockabilly::TimeZone;
use ksl_testutils::*;
use rstest::*;
use serde_json::json;

use super::*;

const COLLECTION_TS: i64 = 1_700_000_000;

#[fixture]
fn ts() -> DateTime<Utc> {
    Utc.timestamp_opt(COLLECTION_TS, 0).unwrap()
}

fn float_field(rec: &NormalizedRecord, field: &str) -> f64 {
    rec.data[field].as_f64().unwrap()
}
