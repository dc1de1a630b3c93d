mod field_bag;

use std::collections::BTreeMap;

use clockabilly::{
    DateTime,
    Utc,
};
pub use field_bag::{
    FieldBag,
    RecordError,
    to_field_bag,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::extract::created_by;
use crate::k8s::KubernetesError;
use crate::prelude::*;

// The uniform output unit: every kind produces these, so that a single log sink can index and
// query across all of them.  Kind-specific attributes go in `data`; everything else is common
// object metadata.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub resource_type: String,
    pub name: String,
    pub namespace: String,

    // shared by every record produced in the same collection pass
    pub timestamp: DateTime<Utc>,
    pub created_timestamp: Option<i64>,

    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,

    pub created_by_kind: String,
    pub created_by_name: String,

    pub data: FieldBag,
}

impl NormalizedRecord {
    pub fn for_object<K: Resource>(
        resource_type: &str,
        obj: &K,
        timestamp: DateTime<Utc>,
        data: FieldBag,
    ) -> anyhow::Result<NormalizedRecord> {
        let Some(name) = obj.meta().name.clone() else {
            return Err(KubernetesError::missing_field("metadata.name"));
        };
        let (created_by_kind, created_by_name) = created_by(obj.owner_references());

        Ok(NormalizedRecord {
            resource_type: resource_type.into(),
            name,
            namespace: obj.namespace().unwrap_or_default(),
            timestamp,
            created_timestamp: obj.creation_ts(),
            labels: obj.labels().clone(),
            annotations: obj.annotations().clone(),
            created_by_kind,
            created_by_name,
            data,
        })
    }

    // For kinds with repeated child elements (e.g., the containers in a pod); the record inherits
    // all of the parent's metadata and gets a compound "parent/child" name.
    pub fn for_child<K: Resource>(
        resource_type: &str,
        parent: &K,
        child_name: &str,
        timestamp: DateTime<Utc>,
        data: FieldBag,
    ) -> anyhow::Result<NormalizedRecord> {
        let mut rec = NormalizedRecord::for_object(resource_type, parent, timestamp, data)?;
        rec.name = format!("{}{CHILD_NAME_SEPARATOR}{child_name}", rec.name);
        Ok(rec)
    }
}
