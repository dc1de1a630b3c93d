use std::fmt::Debug;
use std::hash::Hash;

use async_trait::async_trait;
use clockabilly::{
    DateTime,
    Utc,
};
use ksl_core::prelude::*;
use ksl_core::record::to_field_bag;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::*;

use crate::cache::{
    CacheHandle,
    CacheProvider,
};

// Everything a handler needs to know about the collection pass it is participating in.
pub struct CollectionContext {
    pub namespaces: NamespaceFilter,
    pub timestamp: DateTime<Utc>,
    cancel: watch::Receiver<bool>,
}

impl CollectionContext {
    pub fn new(namespaces: NamespaceFilter, timestamp: DateTime<Utc>, cancel: watch::Receiver<bool>) -> Self {
        CollectionContext { namespaces, timestamp, cancel }
    }

    // A context that can never be cancelled; the sender is dropped immediately so the receiver
    // keeps reporting its initial value.
    pub fn uncancellable(namespaces: NamespaceFilter, timestamp: DateTime<Utc>) -> Self {
        let (_, rx) = watch::channel(false);
        CollectionContext::new(namespaces, timestamp, rx)
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }
}

// The contract every kind implements.  Binding happens once at startup and is the only async (and
// the only fallible-at-setup) step; after that, collecting is a synchronous read of the local
// cache, so it is safe to run every handler on its own blocking thread.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    fn resource_type(&self) -> &str;

    async fn bind(&mut self, provider: &mut CacheProvider) -> EmptyResult;

    fn is_ready(&self) -> bool;

    fn collect(&self, ctx: &CollectionContext) -> anyhow::Result<Vec<NormalizedRecord>>;
}

// Most kinds are "one typed object in, N records out"; implementing this trait and wrapping it in
// a KindHandler is all that's needed to add a new built-in kind.
pub trait ObjectMapper: Send + Sync + 'static {
    type Object: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug + Send + Sync + 'static;

    const RESOURCE_TYPE: &'static str;
    const CLUSTER_SCOPED: bool = false;

    fn map(&self, obj: &Self::Object, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>>;
}

pub fn single_record<K: Resource, T: Serialize>(
    resource_type: &str,
    obj: &K,
    ts: DateTime<Utc>,
    data: &T,
) -> anyhow::Result<Vec<NormalizedRecord>> {
    Ok(vec![NormalizedRecord::for_object(resource_type, obj, ts, to_field_bag(data)?)?])
}

pub struct KindHandler<M: ObjectMapper> {
    mapper: M,
    cache: CacheHandle<M::Object>,
}

impl<M: ObjectMapper> KindHandler<M> {
    pub fn new(mapper: M) -> KindHandler<M> {
        KindHandler { mapper, cache: CacheHandle::unbound() }
    }

    pub fn with_cache(mapper: M, cache: CacheHandle<M::Object>) -> KindHandler<M> {
        KindHandler { mapper, cache }
    }
}

#[async_trait]
impl<M: ObjectMapper> ResourceHandler for KindHandler<M> {
    fn resource_type(&self) -> &str {
        M::RESOURCE_TYPE
    }

    async fn bind(&mut self, provider: &mut CacheProvider) -> EmptyResult {
        self.cache = provider.cache_for::<M::Object>(()).await?;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.cache.is_ready()
    }

    fn collect(&self, ctx: &CollectionContext) -> anyhow::Result<Vec<NormalizedRecord>> {
        collect_from(&self.cache, M::RESOURCE_TYPE, M::CLUSTER_SCOPED, ctx, |obj| self.mapper.map(obj, ctx.timestamp))
    }
}

// The shared collection loop: snapshot the cache, apply the namespace filter (namespaced kinds
// only), and map each object.  An object that can't be mapped is skipped without failing the rest
// of the kind.
pub(crate) fn collect_from<K, F>(
    cache: &CacheHandle<K>,
    resource_type: &str,
    cluster_scoped: bool,
    ctx: &CollectionContext,
    map: F,
) -> anyhow::Result<Vec<NormalizedRecord>>
where
    K: Resource + Clone + 'static,
    K::DynamicType: Eq + Hash + Clone,
    F: Fn(&K) -> anyhow::Result<Vec<NormalizedRecord>>,
{
    cache.ensure_live(resource_type)?;

    let mut records = vec![];
    for obj in cache.list_current() {
        if ctx.is_cancelled() {
            debug!("{resource_type} collection cancelled after {} record(s)", records.len());
            break;
        }

        if !cluster_scoped && !ctx.namespaces.includes(&obj.namespace().unwrap_or_default()) {
            continue;
        }

        match map(&obj) {
            Ok(recs) => records.extend(recs),
            Err(err) => trace!("skipping malformed {resource_type} object {}: {err}", obj.namespaced_name()),
        }
    }
    Ok(records)
}
