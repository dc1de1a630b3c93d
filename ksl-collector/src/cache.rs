use std::any::{
    Any,
    TypeId,
};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use futures::{
    FutureExt,
    StreamExt,
    future,
};
use ksl_core::k8s::ApiSet;
use ksl_core::prelude::*;
use kube::api::ApiResource;
use kube::discovery::ApiCapabilities;
use kube::runtime::reflector::Store;
use kube::runtime::reflector::store::Writer;
use kube::runtime::{
    WatchStreamExt,
    watcher,
};
use serde::de::DeserializeOwned;
use tokio::task::JoinSet;
use tracing::*;

use crate::errors::*;

#[derive(Debug, Eq, PartialEq)]
enum Readiness {
    Unbound,
    Pending,
    Ready,
    Abandoned,
}

// A read-only view onto the locally cached copy of one kind.  Handlers only ever see the cache
// through this handle: they can ask whether the initial list has completed, and they can take a
// point-in-time snapshot of its contents.  Neither operation blocks.
pub struct CacheHandle<K>
where
    K: Resource + Clone + 'static,
    K::DynamicType: Eq + Hash + Clone,
{
    store: Option<Store<K>>,
}

impl<K> CacheHandle<K>
where
    K: Resource + Clone + 'static,
    K::DynamicType: Eq + Hash + Clone,
{
    pub fn new(store: Store<K>) -> CacheHandle<K> {
        CacheHandle { store: Some(store) }
    }

    pub fn unbound() -> CacheHandle<K> {
        CacheHandle { store: None }
    }

    pub fn is_bound(&self) -> bool {
        self.store.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.readiness() == Readiness::Ready
    }

    // Empty (not an error) if the cache is unbound or hasn't finished its initial list yet.
    pub fn list_current(&self) -> Vec<Arc<K>> {
        match &self.store {
            Some(store) if self.is_ready() => store.state(),
            _ => vec![],
        }
    }

    // A cache whose writer went away before the initial list completed can never become ready;
    // that's the one cache state that counts as a collection failure.
    pub fn ensure_live(&self, resource_type: &str) -> EmptyResult {
        if self.readiness() == Readiness::Abandoned {
            return Err(CollectorError::cache_abandoned(resource_type));
        }
        Ok(())
    }

    fn readiness(&self) -> Readiness {
        let Some(store) = &self.store else {
            return Readiness::Unbound;
        };

        match store.wait_until_ready().now_or_never() {
            Some(Ok(())) => Readiness::Ready,
            Some(Err(_)) => Readiness::Abandoned,
            None => Readiness::Pending,
        }
    }
}

// The CacheProvider owns one watch-backed cache per kind and hands out read-only handles to it.
// Caches are shared: two handlers for the same kind (e.g., pods and containers) bind to the same
// store and only one watch runs against the apiserver.  A kind requested both as a typed object
// and as a DynamicObject needs two stores, hence the TypeId in the key.
pub struct CacheProvider {
    apiset: ApiSet,
    stores: HashMap<(GVK, TypeId), Box<dyn Any + Send + Sync>>,
    js: JoinSet<()>,
}

impl CacheProvider {
    pub fn new(client: kube::Client) -> CacheProvider {
        CacheProvider {
            apiset: ApiSet::new(client),
            stores: HashMap::new(),
            js: JoinSet::new(),
        }
    }

    pub async fn discover(&mut self, gvk: &GVK) -> anyhow::Result<(ApiResource, ApiCapabilities)> {
        Ok(self.apiset.discover(gvk).await?.clone())
    }

    pub async fn cache_for<K>(&mut self, dyntype: K::DynamicType) -> anyhow::Result<CacheHandle<K>>
    where
        K: Resource + Clone + DeserializeOwned + Debug + Send + Sync + 'static,
        K::DynamicType: Eq + Hash + Clone + Send + Sync + 'static,
    {
        let gvk = GVK::for_resource::<K>(&dyntype);
        let key = (gvk.clone(), TypeId::of::<K>());
        if let Some(store) = self.stores.get(&key).and_then(|s| s.downcast_ref::<Store<K>>()) {
            debug!("reusing cache for {gvk}");
            return Ok(CacheHandle::new(store.clone()));
        }

        // Watches are cluster-wide; namespace filtering happens at collection time.
        self.apiset.discover(&gvk).await?;
        let api = kube::Api::<K>::all_with(self.apiset.client().clone(), &dyntype);
        let writer = Writer::new(dyntype);
        let store = writer.as_reader();

        // Individual watch events are irrelevant here, only the store contents are read.  Errors
        // are retried with backoff, but a kind that keeps failing never becomes ready, so say so.
        let name = gvk.to_string();
        let stream = watcher(api, watcher::Config::default()).default_backoff().reflect(writer);
        self.js.spawn(
            stream
                .for_each(move |res| {
                    if let Err(err) = res {
                        error!("watch for {name} failed: {err}");
                    }
                    future::ready(())
                })
                .in_current_span(),
        );

        info!("started cache for {gvk}");
        self.stores.insert(key, Box::new(store.clone()));
        Ok(CacheHandle::new(store))
    }

    pub fn cache_count(&self) -> usize {
        self.stores.len()
    }

    pub async fn shutdown(&mut self) {
        info!("stopping {} cache(s)", self.stores.len());
        self.js.shutdown().await;
    }
}
