use k8s_openapi::api::policy::v1 as policyv1;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use super::*;

const PDB_CONDITIONS: &[&str] = &["DisruptionAllowed"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PodDisruptionBudgetData {
    min_available: Option<IntOrString>,
    max_unavailable: Option<IntOrString>,
    current_healthy: Option<i32>,
    desired_healthy: Option<i32>,
    disruptions_allowed: Option<i32>,
    expected_pods: Option<i32>,
    observed_generation: Option<i64>,
    condition_disruption_allowed: Option<bool>,
    conditions: BTreeMap<String, bool>,
}

pub struct PodDisruptionBudgetMapper;

impl ObjectMapper for PodDisruptionBudgetMapper {
    type Object = policyv1::PodDisruptionBudget;

    const RESOURCE_TYPE: &'static str = "poddisruptionbudget";

    fn map(&self, pdb: &policyv1::PodDisruptionBudget, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = pdb.spec.as_ref();
        let status = pdb.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, pdb, ts, &PodDisruptionBudgetData {
            min_available: spec.and_then(|s| s.min_available.clone()),
            max_unavailable: spec.and_then(|s| s.max_unavailable.clone()),
            current_healthy: status.map(|s| s.current_healthy),
            desired_healthy: status.map(|s| s.desired_healthy),
            disruptions_allowed: status.map(|s| s.disruptions_allowed),
            expected_pods: status.map(|s| s.expected_pods),
            observed_generation: status.and_then(|s| s.observed_generation),
            condition_disruption_allowed: condition_status(conditions, "DisruptionAllowed"),
            conditions: other_conditions(conditions, PDB_CONDITIONS),
        })
    }
}
