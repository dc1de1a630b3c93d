mod apiset;
mod gvk;
mod util;

pub use apiset::ApiSet;
pub use gvk::GVK;
pub use util::*;

use crate::errors::*;

err_impl! {pub KubernetesError,
    #[error("object is missing required field: {0}")]
    MissingField(String),

    #[error("invalid format for gvk: {0}")]
    MalformedGvk(String),
}

pub trait KubeResourceExt {
    fn namespaced_name(&self) -> String;
    fn creation_ts(&self) -> Option<i64>;
}

#[cfg(test)]
mod tests;
