use serde::Serialize;
use serde_json as json;

use crate::errors::*;

// An open, ordered bag of kind-specific attributes.  Ordering follows the declaration order of
// the record it was built from, but nothing downstream depends on it.
pub type FieldBag = json::Map<String, json::Value>;

err_impl! {pub RecordError,
    #[error("record must serialize to a map of fields, got {0}")]
    NotAStruct(String),
}

// Per-kind records declare the external name of every field through serde attributes, and
// exclude internal fields with #[serde(skip)]; this walks whatever the derive produced.  Optional
// fields become an explicit null rather than a missing key, and nothing else is flattened.
pub fn to_field_bag<T: Serialize + ?Sized>(record: &T) -> anyhow::Result<FieldBag> {
    match json::to_value(record)? {
        json::Value::Object(bag) => Ok(bag),
        json::Value::Null => Err(RecordError::not_a_struct("null")),
        json::Value::Bool(_) => Err(RecordError::not_a_struct("bool")),
        json::Value::Number(_) => Err(RecordError::not_a_struct("number")),
        json::Value::String(_) => Err(RecordError::not_a_struct("string")),
        json::Value::Array(_) => Err(RecordError::not_a_struct("array")),
    }
}
