//! # Child Roles
//!
//! The fixed set of child objects a `Cincinnati` owns, and how each is named.

use crate::constants::{
    NAME_DEPLOYMENT_TRUSTED_CA, SUFFIX_CONFIG, SUFFIX_ENV_CONFIG, SUFFIX_GRAPH_BUILDER_SERVICE,
    SUFFIX_POLICY_ENGINE_SERVICE, SUFFIX_TRUSTED_CA,
};
use crate::crd::Cincinnati;
use crate::naming::validation::NamingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kubernetes kind of a child object
///
/// Part of the addressing tuple: the Deployment and the PodDisruptionBudget share a
/// name and are told apart by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChildKind {
    Deployment,
    PodDisruptionBudget,
    ConfigMap,
    Service,
}

impl ChildKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildKind::Deployment => "Deployment",
            ChildKind::PodDisruptionBudget => "PodDisruptionBudget",
            ChildKind::ConfigMap => "ConfigMap",
            ChildKind::Service => "Service",
        }
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a child object within one `Cincinnati`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChildRole {
    /// Operand Deployment running graph builder and policy engine
    Deployment,
    /// PodDisruptionBudget for the operand Deployment
    PodDisruptionBudget,
    /// ConfigMap with the operand environment
    EnvConfig,
    /// ConfigMap with graph builder and policy engine settings
    Config,
    /// Service in front of the policy engine
    PolicyEngineService,
    /// Service in front of the graph builder
    GraphBuilderService,
    /// Per-instance copy of the cluster's additional trusted CA
    TrustedCaConfig,
    /// Namespace-wide trusted CA bundle, shared by all instances
    TrustedCaDeployment,
}

impl ChildRole {
    /// All roles, in the order the reconciler creates them
    pub const ALL: [ChildRole; 8] = [
        ChildRole::Deployment,
        ChildRole::PodDisruptionBudget,
        ChildRole::EnvConfig,
        ChildRole::Config,
        ChildRole::PolicyEngineService,
        ChildRole::GraphBuilderService,
        ChildRole::TrustedCaConfig,
        ChildRole::TrustedCaDeployment,
    ];

    /// Stable kebab-case identifier, also used as the `app.kubernetes.io/component` label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildRole::Deployment => "deployment",
            ChildRole::PodDisruptionBudget => "pod-disruption-budget",
            ChildRole::EnvConfig => "env-config",
            ChildRole::Config => "config",
            ChildRole::PolicyEngineService => "policy-engine-service",
            ChildRole::GraphBuilderService => "graph-builder-service",
            ChildRole::TrustedCaConfig => "trusted-ca-config",
            ChildRole::TrustedCaDeployment => "trusted-ca-deployment",
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChildKind {
        match self {
            ChildRole::Deployment => ChildKind::Deployment,
            ChildRole::PodDisruptionBudget => ChildKind::PodDisruptionBudget,
            ChildRole::EnvConfig
            | ChildRole::Config
            | ChildRole::TrustedCaConfig
            | ChildRole::TrustedCaDeployment => ChildKind::ConfigMap,
            ChildRole::PolicyEngineService | ChildRole::GraphBuilderService => {
                ChildKind::Service
            }
        }
    }

    /// Suffix appended to the parent name, if the role has one
    #[must_use]
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            ChildRole::Deployment
            | ChildRole::PodDisruptionBudget
            | ChildRole::TrustedCaDeployment => None,
            ChildRole::EnvConfig => Some(SUFFIX_ENV_CONFIG),
            ChildRole::Config => Some(SUFFIX_CONFIG),
            ChildRole::PolicyEngineService => Some(SUFFIX_POLICY_ENGINE_SERVICE),
            ChildRole::GraphBuilderService => Some(SUFFIX_GRAPH_BUILDER_SERVICE),
            ChildRole::TrustedCaConfig => Some(SUFFIX_TRUSTED_CA),
        }
    }

    /// Whether the name depends on the parent at all
    #[must_use]
    pub fn is_parent_scoped(&self) -> bool {
        !matches!(self, ChildRole::TrustedCaDeployment)
    }

    /// Derive the child name from a parent name
    #[must_use]
    pub fn derive(&self, parent_name: &str) -> String {
        match self {
            ChildRole::TrustedCaDeployment => NAME_DEPLOYMENT_TRUSTED_CA.to_string(),
            _ => match self.suffix() {
                Some(suffix) => format!("{parent_name}{suffix}"),
                None => parent_name.to_string(),
            },
        }
    }

    /// Derive the child name for a `Cincinnati`
    #[must_use]
    pub fn name_for(&self, instance: &Cincinnati) -> String {
        self.derive(super::parent_name(instance))
    }

    /// Human-readable naming rule, as printed by `cincinnati-names roles`
    #[must_use]
    pub fn rule(&self) -> String {
        match (self.is_parent_scoped(), self.suffix()) {
            (false, _) => format!("\"{NAME_DEPLOYMENT_TRUSTED_CA}\""),
            (true, Some(suffix)) => format!("<name>{suffix}"),
            (true, None) => "<name>".to_string(),
        }
    }
}

impl fmt::Display for ChildRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChildRole {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChildRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| NamingError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_from_parent_name() {
        let cases = [
            (ChildRole::Deployment, "example"),
            (ChildRole::PodDisruptionBudget, "example"),
            (ChildRole::EnvConfig, "example-env"),
            (ChildRole::Config, "example-config"),
            (ChildRole::PolicyEngineService, "example-policy-engine"),
            (ChildRole::GraphBuilderService, "example-graph-builder"),
            (ChildRole::TrustedCaConfig, "example-trusted-ca"),
            (ChildRole::TrustedCaDeployment, "trusted-ca"),
        ];
        for (role, expected) in cases {
            assert_eq!(role.derive("example"), expected, "role {role}");
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ChildRole::Deployment.kind(), ChildKind::Deployment);
        assert_eq!(
            ChildRole::PodDisruptionBudget.kind(),
            ChildKind::PodDisruptionBudget
        );
        assert_eq!(ChildRole::PolicyEngineService.kind(), ChildKind::Service);
        assert_eq!(ChildRole::GraphBuilderService.kind(), ChildKind::Service);
        assert_eq!(ChildRole::TrustedCaDeployment.kind(), ChildKind::ConfigMap);
    }

    #[test]
    fn test_role_identifier_round_trip() {
        for role in ChildRole::ALL {
            assert_eq!(role.as_str().parse::<ChildRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role() {
        let err = "statefulset".parse::<ChildRole>().unwrap_err();
        assert_eq!(err, NamingError::UnknownRole("statefulset".to_string()));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ChildRole::PolicyEngineService).unwrap();
        assert_eq!(json, "\"policy-engine-service\"");
    }

    #[test]
    fn test_rule() {
        assert_eq!(ChildRole::Deployment.rule(), "<name>");
        assert_eq!(ChildRole::EnvConfig.rule(), "<name>-env");
        assert_eq!(ChildRole::TrustedCaDeployment.rule(), "\"trusted-ca\"");
    }
}
