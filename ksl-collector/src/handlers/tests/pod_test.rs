use super::*;

#[rstest]
fn test_pod_record(ts: DateTime<Utc>, test_pod: corev1::Pod) {
    let records = PodMapper.map(&test_pod, ts).unwrap();
    assert_len_eq_x!(&records, 1);

    let rec = &records[0];
    assert_eq!(rec.name, TEST_POD);
    assert_eq!(rec.created_by_kind, "ReplicaSet");
    assert_eq!(rec.created_by_name, TEST_REPLICASET);
    assert_eq!(rec.data["phase"], json!("Running"));
    assert_eq!(rec.data["nodeName"], json!(TEST_NODE));
    assert_eq!(rec.data["podIp"], json!("10.0.0.12"));
    assert_eq!(rec.data["hostIp"], json!(null));
    assert_eq!(rec.data["containerCount"], json!(2));
    assert_eq!(rec.data["initContainerCount"], json!(0));
    assert_eq!(rec.data["totalRestarts"], json!(5));
    assert_eq!(rec.data["conditionReady"], json!(false));
    assert_eq!(rec.data["conditionPodScheduled"], json!(true));
    assert_eq!(rec.data["conditionInitialized"], json!(null));
    assert_eq!(rec.data["conditions"], json!({}));
}

#[rstest]
fn test_pod_record_no_container_statuses(ts: DateTime<Utc>, mut test_pod: corev1::Pod) {
    test_pod.status.as_mut().unwrap().container_statuses = None;
    let records = PodMapper.map(&test_pod, ts).unwrap();
    assert_eq!(records[0].data["totalRestarts"], json!(null));
}

#[rstest]
fn test_container_records(ts: DateTime<Utc>, test_pod: corev1::Pod) {
    let records = ContainerMapper.map(&test_pod, ts).unwrap();
    assert_len_eq_x!(&records, 2);

    let app = &records[0];
    assert_eq!(app.resource_type, "container");
    assert_eq!(app.name, format!("{TEST_POD}/app"));
    assert_eq!(app.namespace, TEST_NAMESPACE);
    assert_eq!(app.created_by_kind, "ReplicaSet");
    assert_eq!(app.data["image"], json!("nginx:1.27"));
    assert_eq!(app.data["init"], json!(false));
    assert_eq!(app.data["ready"], json!(true));
    assert_eq!(app.data["restartCount"], json!(1));
    assert_eq!(app.data["state"], json!("running"));
    assert_eq!(app.data["stateReason"], json!(null));
    assert_in_delta!(float_field(app, "requestsCpu"), 0.25, 1e-9);
    assert_in_delta!(float_field(app, "limitsCpu"), 0.5, 1e-9);
    assert_in_delta!(float_field(app, "requestsMemory"), 64.0 * 1024.0 * 1024.0, 1e-3);
    assert_in_delta!(float_field(app, "limitsMemory"), 128.0 * 1024.0 * 1024.0, 1e-3);

    let sidecar = &records[1];
    assert_eq!(sidecar.name, format!("{TEST_POD}/sidecar"));
    assert_eq!(sidecar.data["ready"], json!(false));
    assert_eq!(sidecar.data["restartCount"], json!(4));
    assert_eq!(sidecar.data["state"], json!("waiting"));
    assert_eq!(sidecar.data["stateReason"], json!("CrashLoopBackOff"));
    assert_eq!(sidecar.data["requestsCpu"], json!(null));
    assert_eq!(sidecar.data["limitsMemory"], json!(null));
}

#[rstest]
fn test_container_records_init_containers(ts: DateTime<Utc>, mut test_pod: corev1::Pod) {
    test_pod.spec.as_mut().unwrap().init_containers = Some(vec![corev1::Container {
        name: "migrate".into(),
        image: Some("migrate:v2".into()),
        ..Default::default()
    }]);
    test_pod.status.as_mut().unwrap().init_container_statuses = Some(vec![corev1::ContainerStatus {
        name: "migrate".into(),
        state: Some(corev1::ContainerState {
            terminated: Some(corev1::ContainerStateTerminated {
                exit_code: 0,
                reason: Some("Completed".into()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }]);

    let records = ContainerMapper.map(&test_pod, ts).unwrap();
    assert_len_eq_x!(&records, 3);

    let init = &records[0];
    assert_eq!(init.name, format!("{TEST_POD}/migrate"));
    assert_eq!(init.data["init"], json!(true));
    assert_eq!(init.data["state"], json!("terminated"));
    assert_eq!(init.data["stateReason"], json!("Completed"));
    assert_eq!(init.data["exitCode"], json!(0));
}

#[rstest]
fn test_container_records_no_spec(ts: DateTime<Utc>, mut test_pod: corev1::Pod) {
    test_pod.spec = None;
    assert_err!(ContainerMapper.map(&test_pod, ts));
}

#[rstest]
fn test_container_records_no_status(ts: DateTime<Utc>, mut test_pod: corev1::Pod) {
    test_pod.status = None;
    let records = ContainerMapper.map(&test_pod, ts).unwrap();

    assert_len_eq_x!(&records, 2);
    assert_eq!(records[0].data["ready"], json!(null));
    assert_eq!(records[0].data["state"], json!(null));
}
