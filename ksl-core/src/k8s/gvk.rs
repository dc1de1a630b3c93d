use std::fmt;
use std::ops::Deref;

use kube::Resource;
use kube::api::GroupVersionKind;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de,
};

use super::KubernetesError;

// GVK is a "newtype" wrapper around the kube GroupVersionKind object so that kinds can be used as
// map keys, written into configuration files, and printed in log messages in a single consistent
// format: "group/version.Kind", or just "version.Kind" for the core group.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct GVK(GroupVersionKind);

impl GVK {
    pub fn new(group: &str, version: &str, kind: &str) -> GVK {
        GVK(GroupVersionKind::gvk(group, version, kind))
    }

    pub fn for_resource<K: Resource>(dyntype: &K::DynamicType) -> GVK {
        GVK::new(&K::group(dyntype), &K::version(dyntype), &K::kind(dyntype))
    }

    pub fn parse(value: &str) -> anyhow::Result<GVK> {
        let (group, rest) = match value.split_once('/') {
            Some((group, rest)) if !rest.contains('/') => (group, rest),
            Some(_) => return Err(KubernetesError::malformed_gvk(value)),
            None => ("", value),
        };

        match rest.split_once('.') {
            Some((version, kind)) if !version.is_empty() && !kind.is_empty() && !kind.contains('.') => {
                Ok(GVK::new(group, version, kind))
            },
            _ => Err(KubernetesError::malformed_gvk(value)),
        }
    }
}

impl Deref for GVK {
    type Target = GroupVersionKind;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for GVK {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.group.is_empty() {
            write!(f, "{}.{}", self.0.version, self.0.kind)
        } else {
            write!(f, "{}/{}.{}", self.0.group, self.0.version, self.0.kind)
        }
    }
}

impl Serialize for GVK {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct GVKVisitor;

impl<'de> de::Visitor<'de> for GVKVisitor {
    type Value = GVK;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a GroupVersionKind in the format group/version.Kind")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        GVK::parse(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for GVK {
    fn deserialize<D>(deserializer: D) -> Result<GVK, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(GVKVisitor)
    }
}
