use std::collections::BTreeMap;
use std::fs::File;
use std::time::Duration;

use ksl_core::prelude::*;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceConfig {
    pub gvk: GVK,
    pub resource_type: String,

    // output field name -> dotted path into the object, e.g. "spec.config.port"
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectorConfig {
    #[serde(default)]
    pub namespaces: Vec<String>,

    // empty means every built-in kind
    #[serde(default)]
    pub resources: Vec<String>,

    #[serde(default)]
    pub custom_resources: Vec<CustomResourceConfig>,

    #[serde(default = "default_interval", with = "humantime_duration")]
    pub interval: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            namespaces: vec![],
            resources: vec![],
            custom_resources: vec![],
            interval: default_interval(),
        }
    }
}

impl CollectorConfig {
    pub fn load(filename: &str) -> anyhow::Result<Self> {
        let file = File::open(filename)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn namespace_filter(&self) -> NamespaceFilter {
        self.namespaces.iter().cloned().collect()
    }
}

fn default_interval() -> Duration {
    Duration::from_secs(DEFAULT_COLLECTION_INTERVAL_SECONDS)
}

mod humantime_duration {
    use std::time::Duration;

    use serde::{
        Deserialize,
        Deserializer,
        Serializer,
        de,
    };

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&humantime::format_duration(*d).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(de::Error::custom)
    }
}
