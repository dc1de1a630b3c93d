pub mod constants;
pub mod errors;
pub mod extract;
pub mod k8s;
pub mod logging;
pub mod record;

pub mod prelude {
    pub use k8s_openapi::api::core::v1 as corev1;
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::api::DynamicObject;
    pub use kube::{
        Resource,
        ResourceExt,
    };

    pub use crate::constants::*;
    pub use crate::errors::EmptyResult;
    pub use crate::extract::NamespaceFilter;
    pub use crate::k8s::{
        GVK,
        KubeResourceExt,
    };
    pub use crate::record::{
        FieldBag,
        NormalizedRecord,
    };
}
