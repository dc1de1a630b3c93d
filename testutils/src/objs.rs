use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1 as appsv1;
use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use k8s_openapi::chrono::DateTime;
use kube::api::{
    ApiResource,
    DynamicObject,
    GroupVersionKind,
};
use rstest::fixture;
use serde_json::json;

use crate::constants::*;

pub fn test_meta(namespace: Option<&str>, name: &str) -> metav1::ObjectMeta {
    metav1::ObjectMeta {
        namespace: namespace.map(Into::into),
        name: Some(name.into()),
        uid: Some(format!("{name}-uid")),
        creation_timestamp: Some(metav1::Time(DateTime::from_timestamp(TEST_CREATION_TS, 0).unwrap())),
        ..Default::default()
    }
}

pub fn quantities(entries: &[(&str, &str)]) -> Option<BTreeMap<String, Quantity>> {
    Some(entries.iter().map(|(k, v)| (k.to_string(), Quantity(v.to_string()))).collect())
}

#[fixture]
pub fn test_namespace(#[default(TEST_NAMESPACE)] name: &str) -> corev1::Namespace {
    corev1::Namespace {
        metadata: test_meta(None, name),
        status: Some(corev1::NamespaceStatus { phase: Some("Active".into()), ..Default::default() }),
        ..Default::default()
    }
}

#[fixture]
pub fn test_deployment(#[default(TEST_DEPLOYMENT)] name: &str) -> appsv1::Deployment {
    let mut metadata = test_meta(Some(TEST_NAMESPACE), name);
    metadata.labels = Some(BTreeMap::from([("app".into(), name.into())]));

    appsv1::Deployment {
        metadata,
        spec: Some(appsv1::DeploymentSpec {
            replicas: Some(3),
            strategy: Some(appsv1::DeploymentStrategy {
                type_: Some("RollingUpdate".into()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        status: Some(appsv1::DeploymentStatus {
            replicas: Some(3),
            ready_replicas: Some(2),
            available_replicas: Some(2),
            updated_replicas: Some(3),
            observed_generation: Some(7),
            conditions: Some(vec![
                appsv1::DeploymentCondition {
                    type_: "Available".into(),
                    status: "True".into(),
                    ..Default::default()
                },
                appsv1::DeploymentCondition {
                    type_: "Progressing".into(),
                    status: "False".into(),
                    ..Default::default()
                },
                appsv1::DeploymentCondition {
                    type_: "ExternalCheck".into(),
                    status: "True".into(),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        }),
    }
}

#[fixture]
pub fn test_pod(#[default(TEST_POD)] name: &str) -> corev1::Pod {
    let mut metadata = test_meta(Some(TEST_NAMESPACE), name);
    metadata.owner_references = Some(vec![metav1::OwnerReference {
        api_version: "apps/v1".into(),
        kind: "ReplicaSet".into(),
        name: TEST_REPLICASET.into(),
        uid: format!("{TEST_REPLICASET}-uid"),
        controller: Some(true),
        ..Default::default()
    }]);

    corev1::Pod {
        metadata,
        spec: Some(corev1::PodSpec {
            node_name: Some(TEST_NODE.into()),
            service_account_name: Some("default".into()),
            restart_policy: Some("Always".into()),
            containers: vec![
                corev1::Container {
                    name: "app".into(),
                    image: Some("nginx:1.27".into()),
                    resources: Some(corev1::ResourceRequirements {
                        requests: quantities(&[("cpu", "250m"), ("memory", "64Mi")]),
                        limits: quantities(&[("cpu", "500m"), ("memory", "128Mi")]),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                corev1::Container {
                    name: "sidecar".into(),
                    image: Some("busybox:1.36".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }),
        status: Some(corev1::PodStatus {
            phase: Some("Running".into()),
            pod_ip: Some("10.0.0.12".into()),
            qos_class: Some("Burstable".into()),
            conditions: Some(vec![
                corev1::PodCondition {
                    type_: "Ready".into(),
                    status: "False".into(),
                    ..Default::default()
                },
                corev1::PodCondition {
                    type_: "PodScheduled".into(),
                    status: "True".into(),
                    ..Default::default()
                },
            ]),
            container_statuses: Some(vec![
                corev1::ContainerStatus {
                    name: "app".into(),
                    image: "nginx:1.27".into(),
                    ready: true,
                    started: Some(true),
                    restart_count: 1,
                    state: Some(corev1::ContainerState {
                        running: Some(corev1::ContainerStateRunning::default()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                corev1::ContainerStatus {
                    name: "sidecar".into(),
                    image: "busybox:1.36".into(),
                    ready: false,
                    started: Some(false),
                    restart_count: 4,
                    state: Some(corev1::ContainerState {
                        waiting: Some(corev1::ContainerStateWaiting {
                            reason: Some("CrashLoopBackOff".into()),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        }),
    }
}

#[fixture]
pub fn test_node(#[default(TEST_NODE)] name: &str) -> corev1::Node {
    corev1::Node {
        metadata: test_meta(None, name),
        spec: Some(corev1::NodeSpec {
            taints: Some(vec![corev1::Taint {
                key: "dedicated".into(),
                effect: "NoSchedule".into(),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        status: Some(corev1::NodeStatus {
            capacity: quantities(&[("cpu", "4"), ("memory", "16Gi"), ("pods", "110")]),
            allocatable: quantities(&[("cpu", "3800m"), ("memory", "15Gi"), ("pods", "110")]),
            conditions: Some(vec![
                corev1::NodeCondition {
                    type_: "Ready".into(),
                    status: "True".into(),
                    ..Default::default()
                },
                corev1::NodeCondition {
                    type_: "MemoryPressure".into(),
                    status: "False".into(),
                    ..Default::default()
                },
                corev1::NodeCondition {
                    type_: "KernelDeadlock".into(),
                    status: "False".into(),
                    ..Default::default()
                },
            ]),
            addresses: Some(vec![
                corev1::NodeAddress { type_: "Hostname".into(), address: name.into() },
                corev1::NodeAddress { type_: "InternalIP".into(), address: "192.168.1.10".into() },
            ]),
            node_info: Some(corev1::NodeSystemInfo {
                kubelet_version: "v1.30.2".into(),
                container_runtime_version: "containerd://1.7.18".into(),
                os_image: "Ubuntu 22.04.4 LTS".into(),
                architecture: "amd64".into(),
                ..Default::default()
            }),
            ..Default::default()
        }),
    }
}

pub fn widget_api_resource() -> ApiResource {
    ApiResource::from_gvk_with_plural(&GroupVersionKind::gvk("example.com", "v1", "Widget"), "widgets")
}

#[fixture]
pub fn test_custom_object(#[default(TEST_CUSTOM_OBJECT)] name: &str) -> DynamicObject {
    let mut obj = DynamicObject::new(name, &widget_api_resource())
        .within(TEST_NAMESPACE)
        .data(json!({
            "spec": {"config": {"port": 8080, "mode": "fast"}},
            "status": {
                "conditions": [
                    {"type": "Ready", "status": "True"},
                    {"type": "Synced", "status": "Unknown"},
                ],
            },
        }));
    obj.metadata.creation_timestamp = test_meta(None, name).creation_timestamp;
    obj
}
