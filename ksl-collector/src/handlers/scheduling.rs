use k8s_openapi::api::scheduling::v1 as schedulingv1;

use super::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PriorityClassData {
    value: i32,
    global_default: Option<bool>,
    preemption_policy: Option<String>,
    description: Option<String>,
}

pub struct PriorityClassMapper;

impl ObjectMapper for PriorityClassMapper {
    type Object = schedulingv1::PriorityClass;

    const CLUSTER_SCOPED: bool = true;
    const RESOURCE_TYPE: &'static str = "priorityclass";

    fn map(&self, pc: &schedulingv1::PriorityClass, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        single_record(Self::RESOURCE_TYPE, pc, ts, &PriorityClassData {
            value: pc.value,
            global_default: pc.global_default,
            preemption_policy: pc.preemption_policy.clone(),
            description: pc.description.clone(),
        })
    }
}
