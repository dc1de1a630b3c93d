use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1 as appsv1;
use serde_json::json;

use super::*;

fn depl_condition(type_: &str, status: &str) -> appsv1::DeploymentCondition {
    appsv1::DeploymentCondition {
        type_: type_.into(),
        status: status.into(),
        ..Default::default()
    }
}

#[fixture]
fn conditions() -> Vec<appsv1::DeploymentCondition> {
    vec![
        depl_condition("Available", CONDITION_STATUS_TRUE),
        depl_condition("Progressing", CONDITION_STATUS_FALSE),
        depl_condition("ReplicaFailure", CONDITION_STATUS_UNKNOWN),
        depl_condition("SomethingCustom", CONDITION_STATUS_TRUE),
    ]
}

#[rstest]
#[case::present_true("Available", Some(true))]
#[case::present_false("Progressing", Some(false))]
#[case::present_unknown("ReplicaFailure", Some(false))]
#[case::absent("Paused", None)]
fn test_condition_status(conditions: Vec<appsv1::DeploymentCondition>, #[case] type_: &str, #[case] expected: Option<bool>) {
    assert_eq!(condition_status(&conditions, type_), expected);
}

#[rstest]
fn test_condition_status_empty() {
    let conditions: Vec<appsv1::DeploymentCondition> = vec![];
    assert_eq!(condition_status(&conditions, "Available"), None);
}

#[rstest]
fn test_condition_status_first_match_wins() {
    let conditions = vec![depl_condition("Available", "False"), depl_condition("Available", "True")];
    assert_eq!(condition_status(&conditions, "Available"), Some(false));
    assert_eq!(other_conditions(&conditions, &[]), BTreeMap::from([("Available".into(), false)]));
}

#[rstest]
fn test_other_conditions(conditions: Vec<appsv1::DeploymentCondition>) {
    let others = other_conditions(&conditions, &["Available", "Progressing"]);
    assert_eq!(
        others,
        BTreeMap::from([("ReplicaFailure".to_string(), false), ("SomethingCustom".to_string(), true)])
    );
}

#[rstest]
fn test_json_conditions() {
    let data = json!({
        "status": {
            "conditions": [
                {"type": "Ready", "status": "True", "reason": "AllGood"},
                {"type": "Synced", "status": "False"},
                {"type": "NoStatus"},
                {"status": "True"},
                "garbage",
            ],
        },
    });

    let conditions = json_conditions(&data);
    assert_eq!(conditions, vec![("Ready".into(), "True".into()), ("Synced".into(), "False".into())]);
    assert_eq!(condition_status(&conditions, "Ready"), Some(true));
    assert_eq!(condition_status(&conditions, "Synced"), Some(false));
    assert_eq!(condition_status(&conditions, "NoStatus"), None);
}

#[rstest]
#[case::no_status(json!({"spec": {}}))]
#[case::not_an_array(json!({"status": {"conditions": {"type": "Ready"}}}))]
fn test_json_conditions_missing(#[case] data: serde_json::Value) {
    assert_eq!(json_conditions(&data), vec![]);
}
