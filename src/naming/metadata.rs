//! # Child Metadata
//!
//! `ObjectMeta` for child objects: derived name, parent namespace, recommended
//! labels and a controller owner reference back to the `Cincinnati`.

use crate::constants::{
    APP_NAME, LABEL_COMPONENT, LABEL_INSTANCE, LABEL_MANAGED_BY, LABEL_NAME, LABEL_PART_OF,
};
use crate::crd::Cincinnati;
use crate::naming::role::ChildRole;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::Resource;
use std::collections::BTreeMap;

/// Labels carried by the operand pods, selected by both Services
pub fn selector_labels(instance: &Cincinnati) -> BTreeMap<String, String> {
    BTreeMap::from([
        (LABEL_NAME.to_string(), APP_NAME.to_string()),
        (
            LABEL_INSTANCE.to_string(),
            super::parent_name(instance).to_string(),
        ),
    ])
}

/// Recommended labels for a child object
///
/// The namespace-wide trusted CA has no `instance` label since no single
/// `Cincinnati` owns it.
pub fn child_labels(
    instance: &Cincinnati,
    role: ChildRole,
    managed_by: &str,
) -> BTreeMap<String, String> {
    let mut labels = if role.is_parent_scoped() {
        selector_labels(instance)
    } else {
        BTreeMap::from([(LABEL_NAME.to_string(), APP_NAME.to_string())])
    };
    labels.insert(LABEL_COMPONENT.to_string(), role.as_str().to_string());
    labels.insert(LABEL_MANAGED_BY.to_string(), managed_by.to_string());
    labels.insert(LABEL_PART_OF.to_string(), APP_NAME.to_string());
    labels
}

/// Metadata for the child object playing `role`
///
/// Parent-scoped children get a controller owner reference so they are garbage
/// collected with the parent. The reference is only set once the parent has been
/// persisted (it needs the parent's uid).
pub fn child_meta(instance: &Cincinnati, role: ChildRole, managed_by: &str) -> ObjectMeta {
    let owner_references = if role.is_parent_scoped() {
        instance.controller_owner_ref(&()).map(|owner| vec![owner])
    } else {
        None
    };

    ObjectMeta {
        name: Some(role.name_for(instance)),
        namespace: instance.meta().namespace.clone(),
        labels: Some(child_labels(instance, role, managed_by)),
        owner_references,
        ..ObjectMeta::default()
    }
}
