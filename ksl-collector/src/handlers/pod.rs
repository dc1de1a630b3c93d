use super::*;

const POD_CONDITIONS: &[&str] = &["PodScheduled", "Initialized", "ContainersReady", "Ready"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PodData {
    phase: Option<String>,
    node_name: Option<String>,
    pod_ip: Option<String>,
    host_ip: Option<String>,
    qos_class: Option<String>,
    restart_policy: Option<String>,
    service_account: Option<String>,
    priority_class: Option<String>,
    start_time: Option<i64>,
    deletion_timestamp: Option<i64>,
    container_count: Option<usize>,
    init_container_count: Option<usize>,
    total_restarts: Option<i32>,
    condition_pod_scheduled: Option<bool>,
    condition_initialized: Option<bool>,
    condition_containers_ready: Option<bool>,
    condition_ready: Option<bool>,
    conditions: BTreeMap<String, bool>,
}

pub struct PodMapper;

impl ObjectMapper for PodMapper {
    type Object = corev1::Pod;

    const RESOURCE_TYPE: &'static str = "pod";

    fn map(&self, pod: &corev1::Pod, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = pod.spec.as_ref();
        let status = pod.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        // None until the kubelet has reported on at least one container
        let total_restarts = status
            .and_then(|s| s.container_statuses.as_ref())
            .map(|cs| cs.iter().map(|c| c.restart_count).sum());

        single_record(Self::RESOURCE_TYPE, pod, ts, &PodData {
            phase: status.and_then(|s| s.phase.clone()),
            node_name: spec.and_then(|s| s.node_name.clone()),
            pod_ip: status.and_then(|s| s.pod_ip.clone()),
            host_ip: status.and_then(|s| s.host_ip.clone()),
            qos_class: status.and_then(|s| s.qos_class.clone()),
            restart_policy: spec.and_then(|s| s.restart_policy.clone()),
            service_account: spec.and_then(|s| s.service_account_name.clone()),
            priority_class: spec.and_then(|s| s.priority_class_name.clone()),
            start_time: timestamp_of(status.and_then(|s| s.start_time.as_ref())),
            deletion_timestamp: timestamp_of(pod.metadata.deletion_timestamp.as_ref()),
            container_count: spec.map(|s| s.containers.len()),
            init_container_count: spec.map(|s| s.init_containers.as_ref().map_or(0, Vec::len)),
            total_restarts,
            condition_pod_scheduled: condition_status(conditions, "PodScheduled"),
            condition_initialized: condition_status(conditions, "Initialized"),
            condition_containers_ready: condition_status(conditions, "ContainersReady"),
            condition_ready: condition_status(conditions, "Ready"),
            conditions: other_conditions(conditions, POD_CONDITIONS),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContainerData {
    image: Option<String>,
    init: bool,
    ready: Option<bool>,
    started: Option<bool>,
    restart_count: Option<i32>,
    state: Option<String>,
    state_reason: Option<String>,
    exit_code: Option<i32>,
    requests_cpu: Option<f64>,
    requests_memory: Option<f64>,
    limits_cpu: Option<f64>,
    limits_memory: Option<f64>,
}

// Containers are a child element of pods, so they share the pod cache and get one record each,
// named "<pod>/<container>".
pub struct ContainerMapper;

impl ObjectMapper for ContainerMapper {
    type Object = corev1::Pod;

    const RESOURCE_TYPE: &'static str = "container";

    fn map(&self, pod: &corev1::Pod, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let Some(spec) = pod.spec.as_ref() else {
            return Err(KubernetesError::missing_field("spec"));
        };
        let status = pod.status.as_ref();

        let containers = spec.containers.iter().map(|c| (c, false, status.and_then(|s| s.container_statuses.as_ref())));
        let init_containers = spec
            .init_containers
            .iter()
            .flatten()
            .map(|c| (c, true, status.and_then(|s| s.init_container_statuses.as_ref())));

        let mut records = vec![];
        for (container, init, statuses) in init_containers.chain(containers) {
            let cstatus = statuses.and_then(|ss| ss.iter().find(|s| s.name == container.name));
            let data = container_data(container, init, cstatus);
            records.push(NormalizedRecord::for_child(
                Self::RESOURCE_TYPE,
                pod,
                &container.name,
                ts,
                to_field_bag(&data)?,
            )?);
        }
        Ok(records)
    }
}

fn container_data(container: &corev1::Container, init: bool, cstatus: Option<&corev1::ContainerStatus>) -> ContainerData {
    let resources = container.resources.as_ref();
    let requests = resources.and_then(|r| r.requests.as_ref());
    let limits = resources.and_then(|r| r.limits.as_ref());
    let (state, state_reason, exit_code) = container_state(cstatus.and_then(|s| s.state.as_ref()));

    ContainerData {
        image: container.image.clone(),
        init,
        ready: cstatus.map(|s| s.ready),
        started: cstatus.and_then(|s| s.started),
        restart_count: cstatus.map(|s| s.restart_count),
        state,
        state_reason,
        exit_code,
        requests_cpu: resource_quantity(requests, CPU_RESOURCE),
        requests_memory: resource_quantity(requests, MEMORY_RESOURCE),
        limits_cpu: resource_quantity(limits, CPU_RESOURCE),
        limits_memory: resource_quantity(limits, MEMORY_RESOURCE),
    }
}

fn container_state(state: Option<&corev1::ContainerState>) -> (Option<String>, Option<String>, Option<i32>) {
    match state {
        Some(corev1::ContainerState { terminated: Some(t), .. }) => {
            (Some("terminated".into()), t.reason.clone(), Some(t.exit_code))
        },
        Some(corev1::ContainerState { waiting: Some(w), .. }) => (Some("waiting".into()), w.reason.clone(), None),
        Some(corev1::ContainerState { running: Some(_), .. }) => (Some("running".into()), None, None),
        _ => (None, None, None),
    }
}
