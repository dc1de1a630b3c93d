// Well-known labels and annotations
pub const DEFAULT_STORAGE_CLASS_ANNOTATION_KEY: &str = "storageclass.kubernetes.io/is-default-class";
pub const BETA_DEFAULT_STORAGE_CLASS_ANNOTATION_KEY: &str = "storageclass.beta.kubernetes.io/is-default-class";

// Condition status sentinels
pub const CONDITION_STATUS_TRUE: &str = "True";
pub const CONDITION_STATUS_FALSE: &str = "False";
pub const CONDITION_STATUS_UNKNOWN: &str = "Unknown";

// Resource names used in capacity/allocatable/requests/limits maps
pub const CPU_RESOURCE: &str = "cpu";
pub const MEMORY_RESOURCE: &str = "memory";
pub const PODS_RESOURCE: &str = "pods";
pub const STORAGE_RESOURCE: &str = "storage";

// Node address types
pub const INTERNAL_IP_ADDRESS_TYPE: &str = "InternalIP";

// Separators
pub const CHILD_NAME_SEPARATOR: &str = "/";
pub const FIELD_PATH_SEPARATOR: char = '.';

// Defaults
pub const DEFAULT_COLLECTION_INTERVAL_SECONDS: u64 = 60;
