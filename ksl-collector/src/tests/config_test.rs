use assert_fs::prelude::*;
use assertables::*;

use super::*;

#[rstest]
fn test_load_config() {
    let file = assert_fs::NamedTempFile::new("config.yml").unwrap();
    file.write_str(
        "
---
namespaces:
  - default
  - monitoring
resources:
  - pod
  - container
customResources:
  - gvk: example.com/v1.Widget
    resourceType: widget
    customFields:
      port: spec.config.port
interval: 30s
",
    )
    .unwrap();

    let config = CollectorConfig::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.namespaces, vec!["default", "monitoring"]);
    assert_eq!(config.resources, vec!["pod", "container"]);
    assert_eq!(config.interval, Duration::from_secs(30));
    assert_eq!(
        config.custom_resources,
        vec![CustomResourceConfig {
            gvk: GVK::new("example.com", "v1", "Widget"),
            resource_type: "widget".into(),
            custom_fields: [("port".to_string(), "spec.config.port".to_string())].into(),
        }]
    );
    assert!(config.namespace_filter().includes("monitoring"));
    assert!(!config.namespace_filter().includes("kube-system"));
}

#[rstest]
fn test_load_config_defaults() {
    let file = tempfile_with("--- {}\n");

    let config = CollectorConfig::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config, CollectorConfig::default());
    assert_eq!(config.interval, Duration::from_secs(DEFAULT_COLLECTION_INTERVAL_SECONDS));
    assert!(config.namespace_filter().is_empty());
}

#[rstest]
#[case::bad_gvk("customResources:\n  - gvk: not/a/gvk\n    resourceType: widget\n")]
#[case::bad_interval("interval: soon\n")]
fn test_load_config_invalid(#[case] contents: &str) {
    let file = tempfile_with(contents);
    assert_err!(CollectorConfig::load(file.path().to_str().unwrap()));
}

#[rstest]
fn test_load_config_missing() {
    assert_err!(CollectorConfig::load("/does/not/exist.yml"));
}

fn tempfile_with(contents: &str) -> assert_fs::NamedTempFile {
    let file = assert_fs::NamedTempFile::new("config.yml").unwrap();
    file.write_str(contents).unwrap();
    file
}
