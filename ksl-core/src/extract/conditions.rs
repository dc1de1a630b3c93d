use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1 as appsv1;
use k8s_openapi::api::autoscaling::v2 as autoscalingv2;
use k8s_openapi::api::batch::v1 as batchv1;
use serde_json as json;

use super::lookup_path;
use crate::prelude::*;

// Every status condition in the Kubernetes API has the same (type, status) shape, but each kind
// has its own generated struct for it; this trait lets the extraction functions below work on
// all of them (plus plain pairs pulled out of untyped objects).
pub trait StatusCondition {
    fn condition_type(&self) -> &str;
    fn condition_status(&self) -> &str;

    fn is_true(&self) -> bool {
        self.condition_status() == CONDITION_STATUS_TRUE
    }
}

macro_rules! impl_status_condition {
    ($($ctype:ty),+ $(,)?) => {
        $(
            impl StatusCondition for $ctype {
                fn condition_type(&self) -> &str {
                    &self.type_
                }

                fn condition_status(&self) -> &str {
                    &self.status
                }
            }
        )+
    };
}

impl_status_condition!(
    appsv1::DaemonSetCondition,
    appsv1::DeploymentCondition,
    appsv1::ReplicaSetCondition,
    appsv1::StatefulSetCondition,
    autoscalingv2::HorizontalPodAutoscalerCondition,
    batchv1::JobCondition,
    corev1::NamespaceCondition,
    corev1::NodeCondition,
    corev1::PersistentVolumeClaimCondition,
    corev1::PodCondition,
    metav1::Condition,
);

impl StatusCondition for (String, String) {
    fn condition_type(&self) -> &str {
        &self.0
    }

    fn condition_status(&self) -> &str {
        &self.1
    }
}

// Returns Some(true) if the condition is present with status "True", Some(false) if it is present
// with any other status, and None if the object doesn't report the condition at all.  "Not
// reported yet" and "false" are different things and must stay distinguishable.
pub fn condition_status<C: StatusCondition>(conditions: &[C], condition_type: &str) -> Option<bool> {
    conditions
        .iter()
        .find(|c| c.condition_type() == condition_type)
        .map(StatusCondition::is_true)
}

// Everything that isn't promoted to a named field ends up here, so no condition data is dropped.
// If a type is repeated, the first occurrence wins (matching condition_status).
pub fn other_conditions<C: StatusCondition>(conditions: &[C], well_known: &[&str]) -> BTreeMap<String, bool> {
    let mut others = BTreeMap::new();
    for c in conditions.iter().filter(|c| !well_known.contains(&c.condition_type())) {
        others.entry(c.condition_type().into()).or_insert_with(|| c.is_true());
    }
    others
}

// Untyped objects (custom resources) conventionally put their conditions at status.conditions;
// entries without a string type and status are ignored.
pub fn json_conditions(obj_data: &json::Value) -> Vec<(String, String)> {
    let Some(conditions) = lookup_path(obj_data, "status.conditions").and_then(json::Value::as_array) else {
        return vec![];
    };

    conditions
        .iter()
        .filter_map(|c| {
            let type_ = c.get("type")?.as_str()?;
            let status = c.get("status")?.as_str()?;
            Some((type_.to_string(), status.to_string()))
        })
        .collect()
}
