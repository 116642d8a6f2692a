//! # Child Name Sets
//!
//! Every child name for one `Cincinnati`, computed together.

use crate::crd::Cincinnati;
use crate::naming::role::{ChildKind, ChildRole};
use crate::naming::validation::{validate_child_name, validate_parent_identity, NamingError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of one child object within the parent's namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChildRef {
    pub role: ChildRole,
    pub kind: ChildKind,
    pub name: String,
}

impl fmt::Display for ChildRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

/// Names of all children of one `Cincinnati`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildNames {
    pub deployment: String,
    pub pod_disruption_budget: String,
    pub env_config: String,
    pub config: String,
    pub policy_engine_service: String,
    pub graph_builder_service: String,
    pub trusted_ca_config: String,
    pub trusted_ca_deployment: String,
}

impl ChildNames {
    #[must_use]
    pub fn for_instance(instance: &Cincinnati) -> Self {
        Self::from_parent_name(super::parent_name(instance))
    }

    #[must_use]
    pub fn from_parent_name(parent_name: &str) -> Self {
        Self {
            deployment: ChildRole::Deployment.derive(parent_name),
            pod_disruption_budget: ChildRole::PodDisruptionBudget.derive(parent_name),
            env_config: ChildRole::EnvConfig.derive(parent_name),
            config: ChildRole::Config.derive(parent_name),
            policy_engine_service: ChildRole::PolicyEngineService.derive(parent_name),
            graph_builder_service: ChildRole::GraphBuilderService.derive(parent_name),
            trusted_ca_config: ChildRole::TrustedCaConfig.derive(parent_name),
            trusted_ca_deployment: ChildRole::TrustedCaDeployment.derive(parent_name),
        }
    }

    /// Name for a single role
    #[must_use]
    pub fn get(&self, role: ChildRole) -> &str {
        match role {
            ChildRole::Deployment => &self.deployment,
            ChildRole::PodDisruptionBudget => &self.pod_disruption_budget,
            ChildRole::EnvConfig => &self.env_config,
            ChildRole::Config => &self.config,
            ChildRole::PolicyEngineService => &self.policy_engine_service,
            ChildRole::GraphBuilderService => &self.graph_builder_service,
            ChildRole::TrustedCaConfig => &self.trusted_ca_config,
            ChildRole::TrustedCaDeployment => &self.trusted_ca_deployment,
        }
    }

    /// Child addresses in [`ChildRole::ALL`] order
    #[must_use]
    pub fn refs(&self) -> Vec<ChildRef> {
        ChildRole::ALL
            .into_iter()
            .map(|role| ChildRef {
                role,
                kind: role.kind(),
                name: self.get(role).to_string(),
            })
            .collect()
    }

    // The deployment carries the parent's name unchanged
    pub(crate) fn validate(&self) -> Result<(), NamingError> {
        validate_parent_identity(&self.deployment)?;
        ChildRole::ALL
            .into_iter()
            .try_for_each(|role| validate_child_name(role, self.get(role)))
    }
}

/// Derive all child names for a `Cincinnati`, rejecting any the API server would
pub fn try_child_names(instance: &Cincinnati) -> Result<ChildNames, NamingError> {
    let names = ChildNames::for_instance(instance);
    names.validate()?;
    Ok(names)
}
