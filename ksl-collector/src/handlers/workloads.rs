use k8s_openapi::api::apps::v1 as appsv1;

use super::*;

const DEPLOYMENT_CONDITIONS: &[&str] = &["Available", "Progressing", "ReplicaFailure"];
const REPLICASET_CONDITIONS: &[&str] = &["ReplicaFailure"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeploymentData {
    desired_replicas: Option<i32>,
    current_replicas: Option<i32>,
    ready_replicas: Option<i32>,
    available_replicas: Option<i32>,
    updated_replicas: Option<i32>,
    unavailable_replicas: Option<i32>,
    observed_generation: Option<i64>,
    strategy: Option<String>,
    paused: Option<bool>,
    condition_available: Option<bool>,
    condition_progressing: Option<bool>,
    condition_replica_failure: Option<bool>,
    conditions: BTreeMap<String, bool>,
}

pub struct DeploymentMapper;

impl ObjectMapper for DeploymentMapper {
    type Object = appsv1::Deployment;

    const RESOURCE_TYPE: &'static str = "deployment";

    fn map(&self, depl: &appsv1::Deployment, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = depl.spec.as_ref();
        let status = depl.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, depl, ts, &DeploymentData {
            desired_replicas: spec.and_then(|s| s.replicas),
            current_replicas: status.and_then(|s| s.replicas),
            ready_replicas: status.and_then(|s| s.ready_replicas),
            available_replicas: status.and_then(|s| s.available_replicas),
            updated_replicas: status.and_then(|s| s.updated_replicas),
            unavailable_replicas: status.and_then(|s| s.unavailable_replicas),
            observed_generation: status.and_then(|s| s.observed_generation),
            strategy: spec.and_then(|s| s.strategy.as_ref()?.type_.clone()),
            paused: spec.and_then(|s| s.paused),
            condition_available: condition_status(conditions, "Available"),
            condition_progressing: condition_status(conditions, "Progressing"),
            condition_replica_failure: condition_status(conditions, "ReplicaFailure"),
            conditions: other_conditions(conditions, DEPLOYMENT_CONDITIONS),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplicaSetData {
    desired_replicas: Option<i32>,
    current_replicas: Option<i32>,
    ready_replicas: Option<i32>,
    available_replicas: Option<i32>,
    fully_labeled_replicas: Option<i32>,
    observed_generation: Option<i64>,
    condition_replica_failure: Option<bool>,
    conditions: BTreeMap<String, bool>,
}

pub struct ReplicaSetMapper;

impl ObjectMapper for ReplicaSetMapper {
    type Object = appsv1::ReplicaSet;

    const RESOURCE_TYPE: &'static str = "replicaset";

    fn map(&self, rs: &appsv1::ReplicaSet, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let status = rs.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, rs, ts, &ReplicaSetData {
            desired_replicas: rs.spec.as_ref().and_then(|s| s.replicas),
            current_replicas: status.map(|s| s.replicas),
            ready_replicas: status.and_then(|s| s.ready_replicas),
            available_replicas: status.and_then(|s| s.available_replicas),
            fully_labeled_replicas: status.and_then(|s| s.fully_labeled_replicas),
            observed_generation: status.and_then(|s| s.observed_generation),
            condition_replica_failure: condition_status(conditions, "ReplicaFailure"),
            conditions: other_conditions(conditions, REPLICASET_CONDITIONS),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatefulSetData {
    desired_replicas: Option<i32>,
    current_replicas: Option<i32>,
    ready_replicas: Option<i32>,
    available_replicas: Option<i32>,
    updated_replicas: Option<i32>,
    observed_generation: Option<i64>,
    current_revision: Option<String>,
    update_revision: Option<String>,
    pod_management_policy: Option<String>,
    update_strategy: Option<String>,
    conditions: BTreeMap<String, bool>,
}

pub struct StatefulSetMapper;

impl ObjectMapper for StatefulSetMapper {
    type Object = appsv1::StatefulSet;

    const RESOURCE_TYPE: &'static str = "statefulset";

    fn map(&self, sts: &appsv1::StatefulSet, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = sts.spec.as_ref();
        let status = sts.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, sts, ts, &StatefulSetData {
            desired_replicas: spec.and_then(|s| s.replicas),
            current_replicas: status.map(|s| s.replicas),
            ready_replicas: status.and_then(|s| s.ready_replicas),
            available_replicas: status.and_then(|s| s.available_replicas),
            updated_replicas: status.and_then(|s| s.updated_replicas),
            observed_generation: status.and_then(|s| s.observed_generation),
            current_revision: status.and_then(|s| s.current_revision.clone()),
            update_revision: status.and_then(|s| s.update_revision.clone()),
            pod_management_policy: spec.and_then(|s| s.pod_management_policy.clone()),
            update_strategy: spec.and_then(|s| s.update_strategy.as_ref()?.type_.clone()),
            conditions: other_conditions(conditions, &[]),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DaemonSetData {
    desired_number_scheduled: Option<i32>,
    current_number_scheduled: Option<i32>,
    number_misscheduled: Option<i32>,
    number_ready: Option<i32>,
    number_available: Option<i32>,
    number_unavailable: Option<i32>,
    updated_number_scheduled: Option<i32>,
    observed_generation: Option<i64>,
    update_strategy: Option<String>,
    conditions: BTreeMap<String, bool>,
}

pub struct DaemonSetMapper;

impl ObjectMapper for DaemonSetMapper {
    type Object = appsv1::DaemonSet;

    const RESOURCE_TYPE: &'static str = "daemonset";

    fn map(&self, ds: &appsv1::DaemonSet, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let status = ds.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, ds, ts, &DaemonSetData {
            desired_number_scheduled: status.map(|s| s.desired_number_scheduled),
            current_number_scheduled: status.map(|s| s.current_number_scheduled),
            number_misscheduled: status.map(|s| s.number_misscheduled),
            number_ready: status.map(|s| s.number_ready),
            number_available: status.and_then(|s| s.number_available),
            number_unavailable: status.and_then(|s| s.number_unavailable),
            updated_number_scheduled: status.and_then(|s| s.updated_number_scheduled),
            observed_generation: status.and_then(|s| s.observed_generation),
            update_strategy: ds.spec.as_ref().and_then(|s| s.update_strategy.as_ref()?.type_.clone()),
            conditions: other_conditions(conditions, &[]),
        })
    }
}
