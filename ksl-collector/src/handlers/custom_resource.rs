use async_trait::async_trait;
use kube::discovery::Scope;
use serde_json as json;
use tracing::*;

use super::*;
use crate::cache::{
    CacheHandle,
    CacheProvider,
};
use crate::config::CustomResourceConfig;
use crate::handler::{
    CollectionContext,
    collect_from,
};

// Custom fields are flattened in next to these, so they can't be used as custom field names.
pub const RESERVED_FIELD_NAMES: &[&str] = &["apiVersion", "kind", "conditions"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomResourceData {
    api_version: String,
    kind: String,
    #[serde(flatten)]
    custom_fields: BTreeMap<String, json::Value>,
    conditions: BTreeMap<String, bool>,
}

// Handles any kind the cluster serves, as configured by the user: the kind's scope comes from
// discovery, and the configured custom fields are pulled out of the untyped object by path.
pub struct CustomResourceHandler {
    config: CustomResourceConfig,
    cluster_scoped: bool,
    cache: CacheHandle<DynamicObject>,
}

impl CustomResourceHandler {
    pub fn new(config: CustomResourceConfig) -> CustomResourceHandler {
        CustomResourceHandler { config, cluster_scoped: false, cache: CacheHandle::unbound() }
    }

    pub fn with_cache(
        config: CustomResourceConfig,
        cluster_scoped: bool,
        cache: CacheHandle<DynamicObject>,
    ) -> CustomResourceHandler {
        CustomResourceHandler { config, cluster_scoped, cache }
    }

    // Only meaningful once bound; discovery decides whether the namespace filter applies.
    pub fn is_cluster_scoped(&self) -> bool {
        self.cluster_scoped
    }

    pub fn map(&self, obj: &DynamicObject, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        // Items in a list response don't carry their own type info, so use the configured kind.
        let gvk = &self.config.gvk;
        let api_version = if gvk.group.is_empty() { gvk.version.clone() } else { format!("{}/{}", gvk.group, gvk.version) };

        // missing paths are still reported, as null
        let custom_fields = self
            .config
            .custom_fields
            .iter()
            .map(|(field, path)| (field.clone(), lookup_path(&obj.data, path).cloned().unwrap_or(json::Value::Null)))
            .collect();

        single_record(&self.config.resource_type, obj, ts, &CustomResourceData {
            api_version,
            kind: gvk.kind.clone(),
            custom_fields,
            conditions: other_conditions(&json_conditions(&obj.data), &[]),
        })
    }
}

#[async_trait]
impl ResourceHandler for CustomResourceHandler {
    fn resource_type(&self) -> &str {
        &self.config.resource_type
    }

    async fn bind(&mut self, provider: &mut CacheProvider) -> EmptyResult {
        let (api_resource, caps) = provider.discover(&self.config.gvk).await?;
        self.cluster_scoped = matches!(caps.scope, Scope::Cluster);
        debug!(
            "{} is {}",
            self.config.gvk,
            if self.cluster_scoped { "cluster-scoped" } else { "namespaced" }
        );

        self.cache = provider.cache_for::<DynamicObject>(api_resource).await?;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.cache.is_ready()
    }

    fn collect(&self, ctx: &CollectionContext) -> anyhow::Result<Vec<NormalizedRecord>> {
        collect_from(&self.cache, &self.config.resource_type, self.cluster_scoped, ctx, |obj| {
            self.map(obj, ctx.timestamp)
        })
    }
}
