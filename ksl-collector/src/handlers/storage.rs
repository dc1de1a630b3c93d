use k8s_openapi::api::storage::v1 as storagev1;

use super::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistentVolumeData {
    phase: Option<String>,
    storage_class: Option<String>,
    reclaim_policy: Option<String>,
    volume_mode: Option<String>,
    access_modes: Vec<String>,
    capacity_storage: Option<f64>,
    claim_namespace: Option<String>,
    claim_name: Option<String>,
}

pub struct PersistentVolumeMapper;

impl ObjectMapper for PersistentVolumeMapper {
    type Object = corev1::PersistentVolume;

    const CLUSTER_SCOPED: bool = true;
    const RESOURCE_TYPE: &'static str = "persistentvolume";

    fn map(&self, pv: &corev1::PersistentVolume, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = pv.spec.as_ref();
        let claim = spec.and_then(|s| s.claim_ref.as_ref());

        single_record(Self::RESOURCE_TYPE, pv, ts, &PersistentVolumeData {
            phase: pv.status.as_ref().and_then(|s| s.phase.clone()),
            storage_class: spec.and_then(|s| s.storage_class_name.clone()),
            reclaim_policy: spec.and_then(|s| s.persistent_volume_reclaim_policy.clone()),
            volume_mode: spec.and_then(|s| s.volume_mode.clone()),
            access_modes: spec.and_then(|s| s.access_modes.clone()).unwrap_or_default(),
            capacity_storage: resource_quantity(spec.and_then(|s| s.capacity.as_ref()), STORAGE_RESOURCE),
            claim_namespace: claim.and_then(|c| c.namespace.clone()),
            claim_name: claim.and_then(|c| c.name.clone()),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistentVolumeClaimData {
    phase: Option<String>,
    storage_class: Option<String>,
    volume_name: Option<String>,
    volume_mode: Option<String>,
    access_modes: Vec<String>,
    requested_storage: Option<f64>,
    capacity_storage: Option<f64>,
    conditions: BTreeMap<String, bool>,
}

pub struct PersistentVolumeClaimMapper;

impl ObjectMapper for PersistentVolumeClaimMapper {
    type Object = corev1::PersistentVolumeClaim;

    const RESOURCE_TYPE: &'static str = "persistentvolumeclaim";

    fn map(&self, pvc: &corev1::PersistentVolumeClaim, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = pvc.spec.as_ref();
        let status = pvc.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, pvc, ts, &PersistentVolumeClaimData {
            phase: status.and_then(|s| s.phase.clone()),
            storage_class: spec.and_then(|s| s.storage_class_name.clone()),
            volume_name: spec.and_then(|s| s.volume_name.clone()),
            volume_mode: spec.and_then(|s| s.volume_mode.clone()),
            access_modes: spec.and_then(|s| s.access_modes.clone()).unwrap_or_default(),
            requested_storage: resource_quantity(
                spec.and_then(|s| s.resources.as_ref()?.requests.as_ref()),
                STORAGE_RESOURCE,
            ),
            capacity_storage: resource_quantity(status.and_then(|s| s.capacity.as_ref()), STORAGE_RESOURCE),
            conditions: other_conditions(conditions, &[]),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StorageClassData {
    provisioner: String,
    reclaim_policy: Option<String>,
    volume_binding_mode: Option<String>,
    allow_volume_expansion: Option<bool>,
    is_default: bool,
    parameters: BTreeMap<String, String>,
}

pub struct StorageClassMapper;

impl ObjectMapper for StorageClassMapper {
    type Object = storagev1::StorageClass;

    const CLUSTER_SCOPED: bool = true;
    const RESOURCE_TYPE: &'static str = "storageclass";

    fn map(&self, sc: &storagev1::StorageClass, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let is_default = [DEFAULT_STORAGE_CLASS_ANNOTATION_KEY, BETA_DEFAULT_STORAGE_CLASS_ANNOTATION_KEY]
            .iter()
            .any(|key| sc.annotations().get(*key).is_some_and(|v| v == "true"));

        single_record(Self::RESOURCE_TYPE, sc, ts, &StorageClassData {
            provisioner: sc.provisioner.clone(),
            reclaim_policy: sc.reclaim_policy.clone(),
            volume_binding_mode: sc.volume_binding_mode.clone(),
            allow_volume_expansion: sc.allow_volume_expansion,
            is_default,
            parameters: sc.parameters.clone().unwrap_or_default(),
        })
    }
}
