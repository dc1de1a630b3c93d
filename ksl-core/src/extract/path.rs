use serde_json as json;

use crate::constants::FIELD_PATH_SEPARATOR;

// Descend through a tree of nested JSON objects one key at a time; as soon as a segment is missing
// or we hit something that isn't an object partway through, the path doesn't resolve.
pub fn lookup_path<'a>(value: &'a json::Value, path: &str) -> Option<&'a json::Value> {
    path.split(FIELD_PATH_SEPARATOR)
        .try_fold(value, |current, key| current.as_object()?.get(key))
}
