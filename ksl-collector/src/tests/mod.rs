mod config_test;

use std::time::Duration;

use async_trait::async_trait;
use clockabilly::{
    DateTime,
    TimeZone,
    Utc,
};
use k8s_openapi::api::apps::v1 as appsv1;
use ksl_core::prelude::*;
use ksl_testutils::*;
use rstest::*;

use super::*;

const COLLECTION_TS: i64 = 1_700_000_000;

#[fixture]
fn collection_ts() -> DateTime<Utc> {
    Utc.timestamp_opt(COLLECTION_TS, 0).unwrap()
}

#[derive(Clone, Copy)]
enum Behaviour {
    Records(usize),
    Fail,
    Panic,
    WaitForCancel,
}

// Stands in for a real kind so that the aggregation logic can be tested without any caches.
struct FakeHandler {
    resource_type: String,
    behaviour: Behaviour,
}

impl FakeHandler {
    fn boxed(resource_type: &str, behaviour: Behaviour) -> Box<dyn ResourceHandler> {
        Box::new(FakeHandler { resource_type: resource_type.into(), behaviour })
    }
}

#[async_trait]
impl ResourceHandler for FakeHandler {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }

    async fn bind(&mut self, _: &mut CacheProvider) -> EmptyResult {
        Ok(())
    }

    fn is_ready(&self) -> bool {
        !matches!(self.behaviour, Behaviour::Fail)
    }

    fn collect(&self, ctx: &CollectionContext) -> anyhow::Result<Vec<NormalizedRecord>> {
        match self.behaviour {
            Behaviour::Records(n) => (0..n)
                .map(|i| {
                    let ns = test_namespace(&format!("{}-{i}", self.resource_type));
                    NormalizedRecord::for_object(&self.resource_type, &ns, ctx.timestamp, FieldBag::new())
                })
                .collect(),
            Behaviour::Fail => Err(anyhow::anyhow!("the apiserver is on fire")),
            Behaviour::Panic => panic!("handler bug"),
            Behaviour::WaitForCancel => {
                while !ctx.is_cancelled() {
                    std::thread::sleep(Duration::from_millis(10));
                }
                Ok(vec![])
            },
        }
    }
}
