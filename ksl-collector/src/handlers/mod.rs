// One mapper per built-in kind, plus the discovery-driven handler for custom resources.  Mappers
// are plain data transformations; everything cache- and scheduling-related lives in KindHandler.
mod admission;
mod autoscaling;
mod batch;
mod custom_resource;
mod namespace;
mod networking;
mod node;
mod pod;
mod policy;
mod rbac;
mod scheduling;
mod service;
mod storage;
mod workloads;

use std::collections::BTreeMap;

use clockabilly::{
    DateTime,
    Utc,
};
use ksl_core::extract::*;
use ksl_core::k8s::KubernetesError;
use ksl_core::prelude::*;
use ksl_core::record::to_field_bag;
use serde::Serialize;

pub use self::admission::{
    MutatingWebhookConfigurationMapper,
    ValidatingWebhookConfigurationMapper,
};
pub use self::autoscaling::HorizontalPodAutoscalerMapper;
pub use self::batch::{
    CronJobMapper,
    JobMapper,
};
pub use self::custom_resource::{
    CustomResourceHandler,
    RESERVED_FIELD_NAMES,
};
pub use self::namespace::NamespaceMapper;
pub use self::networking::IngressMapper;
pub use self::node::NodeMapper;
pub use self::pod::{
    ContainerMapper,
    PodMapper,
};
pub use self::policy::PodDisruptionBudgetMapper;
pub use self::rbac::{
    ClusterRoleBindingMapper,
    ClusterRoleMapper,
    RoleBindingMapper,
    RoleMapper,
};
pub use self::scheduling::PriorityClassMapper;
pub use self::service::{
    ServiceAccountMapper,
    ServiceMapper,
};
pub use self::storage::{
    PersistentVolumeClaimMapper,
    PersistentVolumeMapper,
    StorageClassMapper,
};
pub use self::workloads::{
    DaemonSetMapper,
    DeploymentMapper,
    ReplicaSetMapper,
    StatefulSetMapper,
};
use crate::handler::{
    KindHandler,
    ObjectMapper,
    ResourceHandler,
    single_record,
};

macro_rules! builtin_handlers {
    ($($mapper:ident),+ $(,)?) => {
        pub const ALL_RESOURCE_TYPES: &[&str] = &[$(<$mapper as ObjectMapper>::RESOURCE_TYPE),+];

        pub fn builtin(resource_type: &str) -> Option<Box<dyn ResourceHandler>> {
            $(
                if resource_type == <$mapper as ObjectMapper>::RESOURCE_TYPE {
                    return Some(Box::new(KindHandler::new($mapper)));
                }
            )+
            None
        }
    };
}

builtin_handlers!(
    NamespaceMapper,
    NodeMapper,
    PodMapper,
    ContainerMapper,
    ServiceMapper,
    ServiceAccountMapper,
    PersistentVolumeMapper,
    PersistentVolumeClaimMapper,
    StorageClassMapper,
    DeploymentMapper,
    ReplicaSetMapper,
    StatefulSetMapper,
    DaemonSetMapper,
    JobMapper,
    CronJobMapper,
    HorizontalPodAutoscalerMapper,
    PodDisruptionBudgetMapper,
    IngressMapper,
    PriorityClassMapper,
    RoleMapper,
    ClusterRoleMapper,
    RoleBindingMapper,
    ClusterRoleBindingMapper,
    ValidatingWebhookConfigurationMapper,
    MutatingWebhookConfigurationMapper,
);

#[cfg(test)]
mod tests;
