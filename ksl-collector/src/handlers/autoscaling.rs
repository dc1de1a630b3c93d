use k8s_openapi::api::autoscaling::v2 as autoscalingv2;

use super::*;

const HPA_CONDITIONS: &[&str] = &["AbleToScale", "ScalingActive", "ScalingLimited"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HorizontalPodAutoscalerData {
    target_kind: Option<String>,
    target_name: Option<String>,
    min_replicas: Option<i32>,
    max_replicas: Option<i32>,
    current_replicas: Option<i32>,
    desired_replicas: Option<i32>,
    metric_count: usize,
    last_scale_time: Option<i64>,
    condition_able_to_scale: Option<bool>,
    condition_scaling_active: Option<bool>,
    condition_scaling_limited: Option<bool>,
    conditions: BTreeMap<String, bool>,
}

pub struct HorizontalPodAutoscalerMapper;

impl ObjectMapper for HorizontalPodAutoscalerMapper {
    type Object = autoscalingv2::HorizontalPodAutoscaler;

    const RESOURCE_TYPE: &'static str = "horizontalpodautoscaler";

    fn map(
        &self,
        hpa: &autoscalingv2::HorizontalPodAutoscaler,
        ts: DateTime<Utc>,
    ) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = hpa.spec.as_ref();
        let status = hpa.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, hpa, ts, &HorizontalPodAutoscalerData {
            target_kind: spec.map(|s| s.scale_target_ref.kind.clone()),
            target_name: spec.map(|s| s.scale_target_ref.name.clone()),
            min_replicas: spec.and_then(|s| s.min_replicas),
            max_replicas: spec.map(|s| s.max_replicas),
            current_replicas: status.and_then(|s| s.current_replicas),
            desired_replicas: status.map(|s| s.desired_replicas),
            metric_count: spec.and_then(|s| s.metrics.as_ref()).map_or(0, Vec::len),
            last_scale_time: timestamp_of(status.and_then(|s| s.last_scale_time.as_ref())),
            condition_able_to_scale: condition_status(conditions, "AbleToScale"),
            condition_scaling_active: condition_status(conditions, "ScalingActive"),
            condition_scaling_limited: condition_status(conditions, "ScalingLimited"),
            conditions: other_conditions(conditions, HPA_CONDITIONS),
        })
    }
}
