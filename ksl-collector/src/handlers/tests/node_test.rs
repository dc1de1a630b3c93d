use super::*;

#[rstest]
fn test_node_record(ts: DateTime<Utc>, test_node: corev1::Node) {
    let records = NodeMapper.map(&test_node, ts).unwrap();
    assert_len_eq_x!(&records, 1);

    let rec = &records[0];
    assert_eq!(rec.name, TEST_NODE);
    assert_eq!(rec.namespace, "");
    assert_eq!(rec.data["taintCount"], json!(1));
    assert_eq!(rec.data["internalIp"], json!("192.168.1.10"));
    assert_eq!(rec.data["kubeletVersion"], json!("v1.30.2"));
    assert_eq!(rec.data["architecture"], json!("amd64"));
    assert_in_delta!(float_field(rec, "capacityCpu"), 4.0, 1e-9);
    assert_in_delta!(float_field(rec, "allocatableCpu"), 3.8, 1e-9);
    assert_in_delta!(float_field(rec, "capacityMemory"), 16.0 * 1024f64.powi(3), 1e-3);
    assert_in_delta!(float_field(rec, "capacityPods"), 110.0, 1e-9);
    assert_eq!(rec.data["conditionReady"], json!(true));
    assert_eq!(rec.data["conditionMemoryPressure"], json!(false));
    assert_eq!(rec.data["conditionDiskPressure"], json!(null));
    assert_eq!(rec.data["conditions"], json!({"KernelDeadlock": false}));
}

#[rstest]
fn test_node_record_no_status(ts: DateTime<Utc>, mut test_node: corev1::Node) {
    test_node.status = None;
    let records = NodeMapper.map(&test_node, ts).unwrap();

    let rec = &records[0];
    assert_eq!(rec.data["internalIp"], json!(null));
    assert_eq!(rec.data["capacityCpu"], json!(null));
    assert_eq!(rec.data["conditionReady"], json!(null));
}

#[rstest]
fn test_namespace_record(ts: DateTime<Utc>, test_namespace: corev1::Namespace) {
    let records = NamespaceMapper.map(&test_namespace, ts).unwrap();

    let rec = &records[0];
    assert_eq!(rec.resource_type, "namespace");
    assert_eq!(rec.name, TEST_NAMESPACE);
    assert_eq!(rec.namespace, "");
    assert_eq!(rec.data["phase"], json!("Active"));
    assert_eq!(rec.data["deletionTimestamp"], json!(null));
}
