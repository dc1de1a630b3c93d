use k8s_openapi::api::apps::v1 as appsv1;

use super::*;

#[rstest]
fn test_deployment_record(ts: DateTime<Utc>, test_deployment: appsv1::Deployment) {
    let records = DeploymentMapper.map(&test_deployment, ts).unwrap();
    assert_len_eq_x!(&records, 1);

    let rec = &records[0];
    assert_eq!(rec.resource_type, "deployment");
    assert_eq!(rec.name, TEST_DEPLOYMENT);
    assert_eq!(rec.namespace, TEST_NAMESPACE);
    assert_eq!(rec.created_timestamp, Some(TEST_CREATION_TS));
    assert_eq!(rec.created_by_kind, "");

    assert_eq!(rec.data["desiredReplicas"], json!(3));
    assert_eq!(rec.data["readyReplicas"], json!(2));
    assert_eq!(rec.data["unavailableReplicas"], json!(null));
    assert_eq!(rec.data["observedGeneration"], json!(7));
    assert_eq!(rec.data["strategy"], json!("RollingUpdate"));
    assert_eq!(rec.data["conditionAvailable"], json!(true));
    assert_eq!(rec.data["conditionProgressing"], json!(false));
    assert_eq!(rec.data["conditionReplicaFailure"], json!(null));
    assert_eq!(rec.data["conditions"], json!({"ExternalCheck": true}));
}

#[rstest]
fn test_deployment_record_no_status(ts: DateTime<Utc>, mut test_deployment: appsv1::Deployment) {
    test_deployment.status = None;
    let records = DeploymentMapper.map(&test_deployment, ts).unwrap();

    let rec = &records[0];
    assert_eq!(rec.data["desiredReplicas"], json!(3));
    assert_eq!(rec.data["currentReplicas"], json!(null));
    assert_eq!(rec.data["conditionAvailable"], json!(null));
    assert_eq!(rec.data["conditions"], json!({}));
}

#[rstest]
fn test_replicaset_record(ts: DateTime<Utc>) {
    let mut metadata = test_meta(Some(TEST_NAMESPACE), TEST_REPLICASET);
    metadata.owner_references = Some(vec![metav1::OwnerReference {
        api_version: "apps/v1".into(),
        kind: "Deployment".into(),
        name: TEST_DEPLOYMENT.into(),
        uid: format!("{TEST_DEPLOYMENT}-uid"),
        ..Default::default()
    }]);
    let rs = appsv1::ReplicaSet {
        metadata,
        spec: Some(appsv1::ReplicaSetSpec { replicas: Some(3), ..Default::default() }),
        status: Some(appsv1::ReplicaSetStatus {
            replicas: 2,
            ready_replicas: Some(1),
            conditions: Some(vec![appsv1::ReplicaSetCondition {
                type_: "ReplicaFailure".into(),
                status: "True".into(),
                ..Default::default()
            }]),
            ..Default::default()
        }),
    };

    let records = ReplicaSetMapper.map(&rs, ts).unwrap();
    let rec = &records[0];
    assert_eq!(rec.created_by_kind, "Deployment");
    assert_eq!(rec.created_by_name, TEST_DEPLOYMENT);
    assert_eq!(rec.data["desiredReplicas"], json!(3));
    assert_eq!(rec.data["currentReplicas"], json!(2));
    assert_eq!(rec.data["readyReplicas"], json!(1));
    assert_eq!(rec.data["conditionReplicaFailure"], json!(true));
}

#[rstest]
fn test_daemonset_record(ts: DateTime<Utc>) {
    let ds = appsv1::DaemonSet {
        metadata: test_meta(Some(TEST_OTHER_NAMESPACE), "kube-proxy"),
        status: Some(appsv1::DaemonSetStatus {
            desired_number_scheduled: 3,
            current_number_scheduled: 3,
            number_ready: 2,
            number_misscheduled: 0,
            ..Default::default()
        }),
        ..Default::default()
    };

    let records = DaemonSetMapper.map(&ds, ts).unwrap();
    let rec = &records[0];
    assert_eq!(rec.namespace, TEST_OTHER_NAMESPACE);
    assert_eq!(rec.data["desiredNumberScheduled"], json!(3));
    assert_eq!(rec.data["numberReady"], json!(2));
    assert_eq!(rec.data["numberAvailable"], json!(null));
    assert_eq!(rec.data["updateStrategy"], json!(null));
}

#[rstest]
fn test_statefulset_record(ts: DateTime<Utc>) {
    let sts = appsv1::StatefulSet {
        metadata: test_meta(Some(TEST_NAMESPACE), "db"),
        spec: Some(appsv1::StatefulSetSpec {
            replicas: Some(3),
            pod_management_policy: Some("Parallel".into()),
            ..Default::default()
        }),
        status: Some(appsv1::StatefulSetStatus {
            replicas: 3,
            ready_replicas: Some(3),
            current_revision: Some("db-7c9d".into()),
            ..Default::default()
        }),
    };

    let records = StatefulSetMapper.map(&sts, ts).unwrap();
    let rec = &records[0];
    assert_eq!(rec.data["desiredReplicas"], json!(3));
    assert_eq!(rec.data["readyReplicas"], json!(3));
    assert_eq!(rec.data["podManagementPolicy"], json!("Parallel"));
    assert_eq!(rec.data["currentRevision"], json!("db-7c9d"));
}
