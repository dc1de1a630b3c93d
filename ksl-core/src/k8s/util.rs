use super::*;
use crate::prelude::*;

pub fn timestamp_of(t: Option<&metav1::Time>) -> Option<i64> {
    t.map(|t| t.0.timestamp())
}

impl<T: Resource> KubeResourceExt for T {
    fn namespaced_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{}/{}", ns, self.name_any()),
            None => self.name_any(),
        }
    }

    fn creation_ts(&self) -> Option<i64> {
        timestamp_of(self.meta().creation_timestamp.as_ref())
    }
}
