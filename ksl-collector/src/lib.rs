mod cache;
mod config;
mod errors;
mod handler;
pub mod handlers;
mod registry;
mod sink;

pub use crate::cache::{
    CacheHandle,
    CacheProvider,
};
pub use crate::config::{
    CollectorConfig,
    CustomResourceConfig,
};
pub use crate::errors::{
    BindError,
    CollectorError,
    HandlerError,
};
pub use crate::handler::{
    CollectionContext,
    KindHandler,
    ObjectMapper,
    ResourceHandler,
    single_record,
};
pub use crate::registry::{
    CollectionResult,
    Collector,
    HandlerRegistry,
    cancelled,
};
pub use crate::sink::{
    JsonLinesSink,
    RecordSink,
};

#[cfg(test)]
mod tests;
