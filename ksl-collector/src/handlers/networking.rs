use k8s_openapi::api::networking::v1 as networkingv1;

use super::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IngressData {
    ingress_class: Option<String>,
    rule_count: usize,
    hosts: Vec<String>,
    tls_hosts: Vec<String>,
    default_backend: bool,
}

pub struct IngressMapper;

impl ObjectMapper for IngressMapper {
    type Object = networkingv1::Ingress;

    const RESOURCE_TYPE: &'static str = "ingress";

    fn map(&self, ing: &networkingv1::Ingress, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = ing.spec.as_ref();
        let rules = spec.and_then(|s| s.rules.as_deref()).unwrap_or_default();

        let tls_hosts: Vec<String> = spec
            .and_then(|s| s.tls.as_ref())
            .into_iter()
            .flatten()
            .flat_map(|tls| tls.hosts.iter().flatten().cloned())
            .collect();

        single_record(Self::RESOURCE_TYPE, ing, ts, &IngressData {
            ingress_class: spec.and_then(|s| s.ingress_class_name.clone()),
            rule_count: rules.len(),
            hosts: rules.iter().filter_map(|r| r.host.clone()).collect(),
            tls_hosts,
            default_backend: spec.is_some_and(|s| s.default_backend.is_some()),
        })
    }
}
