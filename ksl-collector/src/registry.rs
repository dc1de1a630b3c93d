use std::collections::HashMap;
use std::sync::Arc;

use clockabilly::{
    Clockable,
    DateTime,
    Utc,
    UtcClock,
};
use futures::future;
use ksl_core::prelude::*;
use tokio::sync::watch;
use tokio::task::{
    self,
    JoinError,
    JoinSet,
};
use tracing::*;

use crate::cache::CacheProvider;
use crate::config::CollectorConfig;
use crate::errors::*;
use crate::handler::{
    CollectionContext,
    ResourceHandler,
};
use crate::handlers::{
    self,
    CustomResourceHandler,
    RESERVED_FIELD_NAMES,
};

// The set of handlers that will participate in collection, before any of them have been bound to
// a cache.  Binding consumes the registry and produces a Collector.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn ResourceHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> HandlerRegistry {
        Default::default()
    }

    pub fn from_config(config: &CollectorConfig) -> anyhow::Result<HandlerRegistry> {
        let mut registry = HandlerRegistry::new();

        let resource_types: Vec<&str> = if config.resources.is_empty() {
            handlers::ALL_RESOURCE_TYPES.to_vec()
        } else {
            config.resources.iter().map(String::as_str).collect()
        };

        for resource_type in resource_types {
            let Some(handler) = handlers::builtin(resource_type) else {
                return Err(CollectorError::unknown_resource_type(resource_type));
            };
            registry.register(handler)?;
        }

        for cr in &config.custom_resources {
            if let Some(field) = cr.custom_fields.keys().find(|f| RESERVED_FIELD_NAMES.contains(&f.as_str())) {
                return Err(CollectorError::reserved_field_name(&format!("{}.{field}", cr.resource_type)));
            }
            registry.register(Box::new(CustomResourceHandler::new(cr.clone())))?;
        }

        Ok(registry)
    }

    pub fn register(&mut self, handler: Box<dyn ResourceHandler>) -> EmptyResult {
        let resource_type = handler.resource_type();
        if self.handlers.iter().any(|h| h.resource_type() == resource_type) {
            return Err(CollectorError::duplicate_handler(resource_type));
        }

        self.handlers.push(handler);
        Ok(())
    }

    pub fn resource_types(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.resource_type()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    // Handlers that fail to bind are left out of the collector; everything else keeps working.
    pub async fn bind(self, provider: &mut CacheProvider) -> (Collector, Vec<BindError>) {
        let mut bound: Vec<Arc<dyn ResourceHandler>> = vec![];
        let mut errors = vec![];

        for mut handler in self.handlers {
            match handler.bind(provider).await {
                Ok(()) => {
                    info!("bound handler for {}", handler.resource_type());
                    bound.push(Arc::from(handler));
                },
                Err(err) => {
                    let err = BindError::new(handler.resource_type(), err);
                    warn!("{err}");
                    errors.push(err);
                },
            }
        }

        (Collector::new(bound), errors)
    }

    // Skips the bind step entirely, for handlers that already have their caches.
    pub fn into_collector(self) -> Collector {
        Collector::new(self.handlers.into_iter().map(Arc::from).collect())
    }
}

type HandlerOutput = anyhow::Result<Vec<NormalizedRecord>>;

#[derive(Debug)]
pub struct CollectionResult {
    pub timestamp: DateTime<Utc>,
    pub records: Vec<NormalizedRecord>,
    pub errors: Vec<HandlerError>,
    pub cancelled: bool,
}

impl CollectionResult {
    fn new(timestamp: DateTime<Utc>) -> CollectionResult {
        CollectionResult { timestamp, records: vec![], errors: vec![], cancelled: false }
    }

    fn merge(&mut self, res: Result<(task::Id, HandlerOutput), JoinError>, resource_types: &HashMap<task::Id, String>) {
        match res {
            Ok((_, Ok(records))) => self.records.extend(records),
            Ok((id, Err(err))) => {
                let err = HandlerError::new(&resource_types[&id], err);
                error!("{err}");
                self.errors.push(err);
            },
            // aborted after cancellation, not a failure of the handler
            Err(join_err) if join_err.is_cancelled() => (),
            Err(join_err) => {
                let err = HandlerError::new(&resource_types[&join_err.id()], anyhow!("collection task failed: {join_err}"));
                error!("{err}");
                self.errors.push(err);
            },
        }
    }
}

pub struct Collector {
    handlers: Vec<Arc<dyn ResourceHandler>>,
    clock: Box<dyn Clockable + Send + Sync>,
}

impl Collector {
    pub fn new(handlers: Vec<Arc<dyn ResourceHandler>>) -> Collector {
        Collector { handlers, clock: Box::new(UtcClock::new()) }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clockable + Send + Sync>) -> Collector {
        self.clock = clock;
        self
    }

    pub fn resource_types(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.resource_type()).collect()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn ready_count(&self) -> usize {
        self.handlers.iter().filter(|h| h.is_ready()).count()
    }

    // Runs every handler concurrently and merges what they produce.  One handler failing (or
    // panicking) shows up in `errors` and doesn't affect the others.  If cancellation is signalled
    // before every handler is done, whatever has been gathered so far is returned.
    pub async fn collect_all(&self, namespaces: &NamespaceFilter, mut cancel: watch::Receiver<bool>) -> CollectionResult {
        let timestamp = self.clock.now();
        let ctx = Arc::new(CollectionContext::new(namespaces.clone(), timestamp, cancel.clone()));
        let mut result = CollectionResult::new(timestamp);

        let mut js = JoinSet::new();
        let mut resource_types = HashMap::new();
        for handler in &self.handlers {
            let resource_type = handler.resource_type().to_string();
            let (handler, ctx) = (handler.clone(), ctx.clone());
            let task = js.spawn_blocking(move || handler.collect(&ctx));
            resource_types.insert(task.id(), resource_type);
        }

        loop {
            tokio::select! {
                // cancellation is checked first, so a pass that starts out cancelled stops right away
                biased;

                _ = cancelled(&mut cancel) => {
                    warn!("collection pass cancelled with {} task(s) outstanding", js.len());
                    js.abort_all();
                    result.cancelled = true;

                    // anything that finished before the cancel was noticed still counts
                    while let Some(res) = js.try_join_next_with_id() {
                        result.merge(res, &resource_types);
                    }
                    break;
                },
                res = js.join_next_with_id() => match res {
                    None => break,
                    Some(res) => result.merge(res, &resource_types),
                },
            }
        }

        for rec in result.records.iter_mut() {
            rec.timestamp = timestamp;
        }
        debug!("collected {} record(s) with {} error(s)", result.records.len(), result.errors.len());
        result
    }
}

// Resolves once cancellation has been requested.  If the sender is gone, cancellation can never
// be requested, so this never resolves.
pub async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    let closed = cancel.wait_for(|c| *c).await.is_err();
    if closed {
        future::pending::<()>().await;
    }
}
