use std::collections::HashMap;
use std::collections::hash_map::Entry;

use kube::api::ApiResource;
use kube::discovery::ApiCapabilities;
use tracing::*;

use crate::k8s::GVK;

// An ApiSet caches the discovery results returned by the apiserver so that binding several
// handlers against the same kind (or rebinding after a restart of the collection loop) doesn't
// repeatedly make "discovery" calls.  A kind that the cluster does not serve fails here, which is
// what turns an unsupported API group/version into a bind error instead of a watch that never
// becomes ready.
pub struct ApiSet {
    client: kube::Client,
    resources: HashMap<GVK, (ApiResource, ApiCapabilities)>,
}

impl ApiSet {
    pub fn new(client: kube::Client) -> ApiSet {
        ApiSet { client, resources: HashMap::new() }
    }

    pub fn client(&self) -> &kube::Client {
        &self.client
    }

    pub async fn discover(&mut self, gvk: &GVK) -> anyhow::Result<&(ApiResource, ApiCapabilities)> {
        match self.resources.entry(gvk.clone()) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                debug!("running discovery for {}", e.key());
                let api_meta = kube::discovery::pinned_kind(&self.client, e.key()).await?;
                Ok(e.insert(api_meta))
            },
        }
    }
}
