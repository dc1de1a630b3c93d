use super::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NamespaceData {
    phase: Option<String>,
    deletion_timestamp: Option<i64>,
    conditions: BTreeMap<String, bool>,
}

pub struct NamespaceMapper;

impl ObjectMapper for NamespaceMapper {
    type Object = corev1::Namespace;

    const CLUSTER_SCOPED: bool = true;
    const RESOURCE_TYPE: &'static str = "namespace";

    fn map(&self, ns: &corev1::Namespace, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let status = ns.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, ns, ts, &NamespaceData {
            phase: status.and_then(|s| s.phase.clone()),
            deletion_timestamp: timestamp_of(ns.metadata.deletion_timestamp.as_ref()),
            conditions: other_conditions(conditions, &[]),
        })
    }
}
