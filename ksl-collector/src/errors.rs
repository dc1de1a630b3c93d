pub use ksl_core::errors::*;

err_impl! {pub CollectorError,
    #[error("cache for {0} will never become ready: its watch ended before the initial list completed")]
    CacheAbandoned(String),

    #[error("a handler for {0} is already registered")]
    DuplicateHandler(String),

    #[error("custom field name {0} is reserved")]
    ReservedFieldName(String),

    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),
}

// A kind's cache could not be set up (e.g., the cluster doesn't serve its API group/version).
// The kind is excluded from every subsequent collection pass.
#[derive(Debug, Error)]
#[error("could not bind handler for {resource_type}: {err:#}")]
pub struct BindError {
    pub resource_type: String,
    pub err: anyhow::Error,
}

impl BindError {
    pub fn new(resource_type: &str, err: anyhow::Error) -> BindError {
        BindError { resource_type: resource_type.into(), err }
    }
}

// A kind failed to collect during one pass; records from every other kind are still returned.
#[derive(Debug, Error)]
#[error("could not collect {resource_type}: {err:#}")]
pub struct HandlerError {
    pub resource_type: String,
    pub err: anyhow::Error,
}

impl HandlerError {
    pub fn new(resource_type: &str, err: anyhow::Error) -> HandlerError {
        HandlerError { resource_type: resource_type.into(), err }
    }
}
