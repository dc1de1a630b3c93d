use crate::prelude::*;

// Attribution is always the first owner reference in the order the apiserver returned them; we
// deliberately don't look at the `controller` flag or sort the list.
pub fn created_by(owners: &[metav1::OwnerReference]) -> (String, String) {
    match owners.first() {
        Some(owner) => (owner.kind.clone(), owner.name.clone()),
        None => (String::new(), String::new()),
    }
}
