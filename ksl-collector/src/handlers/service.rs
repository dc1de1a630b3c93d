use super::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceData {
    #[serde(rename = "type")]
    type_: Option<String>,
    cluster_ip: Option<String>,
    external_name: Option<String>,
    port_count: usize,
    // "<port>/<protocol>"
    ports: Vec<String>,
    selector: BTreeMap<String, String>,
    load_balancer_ingress: Vec<String>,
}

pub struct ServiceMapper;

impl ObjectMapper for ServiceMapper {
    type Object = corev1::Service;

    const RESOURCE_TYPE: &'static str = "service";

    fn map(&self, svc: &corev1::Service, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = svc.spec.as_ref();

        let ports: Vec<String> = spec
            .and_then(|s| s.ports.as_ref())
            .map(|ports| {
                ports
                    .iter()
                    .map(|p| format!("{}/{}", p.port, p.protocol.as_deref().unwrap_or("TCP")))
                    .collect()
            })
            .unwrap_or_default();

        let load_balancer_ingress: Vec<String> = svc
            .status
            .as_ref()
            .and_then(|s| s.load_balancer.as_ref()?.ingress.as_ref())
            .map(|ingress| ingress.iter().filter_map(|i| i.ip.clone().or_else(|| i.hostname.clone())).collect())
            .unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, svc, ts, &ServiceData {
            type_: spec.and_then(|s| s.type_.clone()),
            cluster_ip: spec.and_then(|s| s.cluster_ip.clone()),
            external_name: spec.and_then(|s| s.external_name.clone()),
            port_count: ports.len(),
            ports,
            selector: spec.and_then(|s| s.selector.clone()).unwrap_or_default(),
            load_balancer_ingress,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceAccountData {
    secret_count: usize,
    image_pull_secret_count: usize,
    automount_token: Option<bool>,
}

pub struct ServiceAccountMapper;

impl ObjectMapper for ServiceAccountMapper {
    type Object = corev1::ServiceAccount;

    const RESOURCE_TYPE: &'static str = "serviceaccount";

    fn map(&self, sa: &corev1::ServiceAccount, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        single_record(Self::RESOURCE_TYPE, sa, ts, &ServiceAccountData {
            secret_count: sa.secrets.as_ref().map_or(0, Vec::len),
            image_pull_secret_count: sa.image_pull_secrets.as_ref().map_or(0, Vec::len),
            automount_token: sa.automount_service_account_token,
        })
    }
}
