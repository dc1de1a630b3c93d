use serde_json::json;

use super::*;

#[fixture]
fn obj_data() -> serde_json::Value {
    json!({
        "spec": {
            "config": {"port": 8080, "tags": ["a", "b"]},
            "replicas": 3,
        },
        "status": null,
    })
}

#[rstest]
fn test_lookup_path(obj_data: serde_json::Value) {
    assert_eq!(lookup_path(&obj_data, "spec.config.port"), Some(&json!(8080)));
    assert_eq!(lookup_path(&obj_data, "spec.config.tags"), Some(&json!(["a", "b"])));
    assert_eq!(lookup_path(&obj_data, "spec.config"), Some(&json!({"port": 8080, "tags": ["a", "b"]})));
}

#[rstest]
#[case::missing_leaf("spec.config.missing")]
#[case::missing_root("metadata.nonexistent")]
#[case::through_scalar("spec.replicas.count")]
#[case::through_array("spec.config.tags.0")]
#[case::through_null("status.conditions")]
#[case::empty_segment("spec..config")]
#[case::empty_path("")]
fn test_lookup_path_absent(obj_data: serde_json::Value, #[case] path: &str) {
    assert_eq!(lookup_path(&obj_data, path), None);
}
