// Stateless helpers shared by every resource handler.  Everything in here is a pure function of
// its arguments, so the same owner/condition/namespace semantics apply uniformly to every kind.
mod conditions;
mod namespace;
mod owners;
mod path;
mod quantity;

pub use conditions::{
    StatusCondition,
    condition_status,
    json_conditions,
    other_conditions,
};
pub use namespace::{
    NamespaceFilter,
    namespace_included,
};
pub use owners::created_by;
pub use path::lookup_path;
pub use quantity::{
    parse_quantity,
    resource_quantity,
};

pub use crate::k8s::timestamp_of;
use crate::errors::*;

err_impl! {pub ExtractError,
    #[error("malformed resource quantity: {0}")]
    MalformedQuantity(String),
}

#[cfg(test)]
mod tests;
