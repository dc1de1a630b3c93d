use k8s_openapi::api::rbac::v1 as rbacv1;

use super::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleData {
    rule_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClusterRoleData {
    rule_count: usize,
    aggregated: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BindingData {
    role_ref_kind: String,
    role_ref_name: String,
    subject_count: usize,
    // "Kind/name", or "Kind/namespace/name" for namespaced subjects
    subjects: Vec<String>,
}

fn binding_data(role_ref: &rbacv1::RoleRef, subjects: Option<&Vec<rbacv1::Subject>>) -> BindingData {
    let subjects: Vec<String> = subjects
        .into_iter()
        .flatten()
        .map(|s| match &s.namespace {
            Some(ns) => format!("{}/{ns}/{}", s.kind, s.name),
            None => format!("{}/{}", s.kind, s.name),
        })
        .collect();

    BindingData {
        role_ref_kind: role_ref.kind.clone(),
        role_ref_name: role_ref.name.clone(),
        subject_count: subjects.len(),
        subjects,
    }
}

pub struct RoleMapper;

impl ObjectMapper for RoleMapper {
    type Object = rbacv1::Role;

    const RESOURCE_TYPE: &'static str = "role";

    fn map(&self, role: &rbacv1::Role, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        single_record(Self::RESOURCE_TYPE, role, ts, &RoleData {
            rule_count: role.rules.as_ref().map_or(0, Vec::len),
        })
    }
}

pub struct ClusterRoleMapper;

impl ObjectMapper for ClusterRoleMapper {
    type Object = rbacv1::ClusterRole;

    const CLUSTER_SCOPED: bool = true;
    const RESOURCE_TYPE: &'static str = "clusterrole";

    fn map(&self, role: &rbacv1::ClusterRole, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        single_record(Self::RESOURCE_TYPE, role, ts, &ClusterRoleData {
            rule_count: role.rules.as_ref().map_or(0, Vec::len),
            aggregated: role.aggregation_rule.is_some(),
        })
    }
}

pub struct RoleBindingMapper;

impl ObjectMapper for RoleBindingMapper {
    type Object = rbacv1::RoleBinding;

    const RESOURCE_TYPE: &'static str = "rolebinding";

    fn map(&self, rb: &rbacv1::RoleBinding, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        single_record(Self::RESOURCE_TYPE, rb, ts, &binding_data(&rb.role_ref, rb.subjects.as_ref()))
    }
}

pub struct ClusterRoleBindingMapper;

impl ObjectMapper for ClusterRoleBindingMapper {
    type Object = rbacv1::ClusterRoleBinding;

    const CLUSTER_SCOPED: bool = true;
    const RESOURCE_TYPE: &'static str = "clusterrolebinding";

    fn map(&self, crb: &rbacv1::ClusterRoleBinding, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        single_record(Self::RESOURCE_TYPE, crb, ts, &binding_data(&crb.role_ref, crb.subjects.as_ref()))
    }
}
