pub const TEST_CREATION_TS: i64 = 1_690_000_000;
pub const TEST_CUSTOM_OBJECT: &str = "the-widget";
pub const TEST_DEPLOYMENT: &str = "the-deployment";
pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_NODE: &str = "the-node";
pub const TEST_POD: &str = "the-pod";
pub const TEST_REPLICASET: &str = "the-deployment-5d8f9b6c7";
pub const TEST_OTHER_NAMESPACE: &str = "kube-system";
pub const TEST_DEFAULT_NAMESPACE: &str = "default";
