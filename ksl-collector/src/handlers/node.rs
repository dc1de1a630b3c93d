use super::*;

const NODE_CONDITIONS: &[&str] = &["Ready", "MemoryPressure", "DiskPressure", "PIDPressure", "NetworkUnavailable"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeData {
    unschedulable: Option<bool>,
    taint_count: usize,
    provider_id: Option<String>,
    internal_ip: Option<String>,
    kubelet_version: Option<String>,
    container_runtime_version: Option<String>,
    os_image: Option<String>,
    architecture: Option<String>,
    capacity_cpu: Option<f64>,
    capacity_memory: Option<f64>,
    capacity_pods: Option<f64>,
    allocatable_cpu: Option<f64>,
    allocatable_memory: Option<f64>,
    allocatable_pods: Option<f64>,
    condition_ready: Option<bool>,
    condition_memory_pressure: Option<bool>,
    condition_disk_pressure: Option<bool>,
    condition_pid_pressure: Option<bool>,
    condition_network_unavailable: Option<bool>,
    conditions: BTreeMap<String, bool>,
}

pub struct NodeMapper;

impl ObjectMapper for NodeMapper {
    type Object = corev1::Node;

    const CLUSTER_SCOPED: bool = true;
    const RESOURCE_TYPE: &'static str = "node";

    fn map(&self, node: &corev1::Node, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = node.spec.as_ref();
        let status = node.status.as_ref();
        let info = status.and_then(|s| s.node_info.as_ref());
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();
        let capacity = status.and_then(|s| s.capacity.as_ref());
        let allocatable = status.and_then(|s| s.allocatable.as_ref());

        let internal_ip = status
            .and_then(|s| s.addresses.as_ref())
            .and_then(|addrs| addrs.iter().find(|a| a.type_ == INTERNAL_IP_ADDRESS_TYPE))
            .map(|a| a.address.clone());

        single_record(Self::RESOURCE_TYPE, node, ts, &NodeData {
            unschedulable: spec.and_then(|s| s.unschedulable),
            taint_count: spec.and_then(|s| s.taints.as_ref()).map_or(0, Vec::len),
            provider_id: spec.and_then(|s| s.provider_id.clone()),
            internal_ip,
            kubelet_version: info.map(|i| i.kubelet_version.clone()),
            container_runtime_version: info.map(|i| i.container_runtime_version.clone()),
            os_image: info.map(|i| i.os_image.clone()),
            architecture: info.map(|i| i.architecture.clone()),
            capacity_cpu: resource_quantity(capacity, CPU_RESOURCE),
            capacity_memory: resource_quantity(capacity, MEMORY_RESOURCE),
            capacity_pods: resource_quantity(capacity, PODS_RESOURCE),
            allocatable_cpu: resource_quantity(allocatable, CPU_RESOURCE),
            allocatable_memory: resource_quantity(allocatable, MEMORY_RESOURCE),
            allocatable_pods: resource_quantity(allocatable, PODS_RESOURCE),
            condition_ready: condition_status(conditions, "Ready"),
            condition_memory_pressure: condition_status(conditions, "MemoryPressure"),
            condition_disk_pressure: condition_status(conditions, "DiskPressure"),
            condition_pid_pressure: condition_status(conditions, "PIDPressure"),
            condition_network_unavailable: condition_status(conditions, "NetworkUnavailable"),
            conditions: other_conditions(conditions, NODE_CONDITIONS),
        })
    }
}
