//! # Meta Command
//!
//! Prints the `ObjectMeta` the reconciler would attach to one child object.

use anyhow::{Context, Result};
use cincinnati_operator::crd::Cincinnati;
use cincinnati_operator::naming::{child_meta, ChildRole};
use tracing::info;

pub fn meta_command(
    instance: &Cincinnati,
    role: ChildRole,
    strict: bool,
    managed_by: &str,
) -> Result<String> {
    if strict {
        role.try_name_for(instance)?;
    }

    let meta = child_meta(instance, role, managed_by);
    if role.is_parent_scoped() && meta.owner_references.is_none() {
        info!("No parent uid given, owner reference omitted (pass --uid to include it)");
    }

    serde_yaml::to_string(&meta).context("Failed to serialize metadata as YAML")
}
