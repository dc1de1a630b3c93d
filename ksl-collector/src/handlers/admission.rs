use k8s_openapi::api::admissionregistration::v1 as admissionv1;

use super::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookConfigurationData {
    webhook_count: usize,
    webhook_names: Vec<String>,
    // keyed by webhook name; webhooks without an explicit policy use the apiserver default
    failure_policies: BTreeMap<String, String>,
    side_effects: BTreeMap<String, String>,
}

impl WebhookConfigurationData {
    fn from_webhooks<'a>(webhooks: impl Iterator<Item = (&'a String, Option<&'a String>, &'a String)>) -> Self {
        let mut data = WebhookConfigurationData {
            webhook_count: 0,
            webhook_names: vec![],
            failure_policies: BTreeMap::new(),
            side_effects: BTreeMap::new(),
        };

        for (name, failure_policy, side_effects) in webhooks {
            data.webhook_count += 1;
            data.webhook_names.push(name.clone());
            if let Some(policy) = failure_policy {
                data.failure_policies.insert(name.clone(), policy.clone());
            }
            data.side_effects.insert(name.clone(), side_effects.clone());
        }
        data
    }
}

pub struct ValidatingWebhookConfigurationMapper;

impl ObjectMapper for ValidatingWebhookConfigurationMapper {
    type Object = admissionv1::ValidatingWebhookConfiguration;

    const CLUSTER_SCOPED: bool = true;
    const RESOURCE_TYPE: &'static str = "validatingwebhookconfiguration";

    fn map(
        &self,
        config: &admissionv1::ValidatingWebhookConfiguration,
        ts: DateTime<Utc>,
    ) -> anyhow::Result<Vec<NormalizedRecord>> {
        let webhooks = config
            .webhooks
            .iter()
            .flatten()
            .map(|wh| (&wh.name, wh.failure_policy.as_ref(), &wh.side_effects));
        single_record(Self::RESOURCE_TYPE, config, ts, &WebhookConfigurationData::from_webhooks(webhooks))
    }
}

pub struct MutatingWebhookConfigurationMapper;

impl ObjectMapper for MutatingWebhookConfigurationMapper {
    type Object = admissionv1::MutatingWebhookConfiguration;

    const CLUSTER_SCOPED: bool = true;
    const RESOURCE_TYPE: &'static str = "mutatingwebhookconfiguration";

    fn map(
        &self,
        config: &admissionv1::MutatingWebhookConfiguration,
        ts: DateTime<Utc>,
    ) -> anyhow::Result<Vec<NormalizedRecord>> {
        let webhooks = config
            .webhooks
            .iter()
            .flatten()
            .map(|wh| (&wh.name, wh.failure_policy.as_ref(), &wh.side_effects));
        single_record(Self::RESOURCE_TYPE, config, ts, &WebhookConfigurationData::from_webhooks(webhooks))
    }
}
