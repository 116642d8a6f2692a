//! # Child Resource Naming
//!
//! Derives the name of every object the operator owns on behalf of a `Cincinnati`.
//!
//! Every name is a pure function of the parent's `metadata.name` and the child's
//! [`ChildRole`]. Nothing is normalized or truncated: the API server has already
//! admitted the parent name, and a degenerate parent (empty name) yields degenerate
//! children such as `"-config"`. Callers that want those rejected up front use the
//! `try_*` variants from [`validation`].
//!
//! ## Module Structure
//!
//! - `role.rs` - `ChildRole`/`ChildKind` and the per-role formatting rule
//! - `names.rs` - `ChildNames`/`ChildRef`, the full set for one instance
//! - `metadata.rs` - labels and owner references for child objects
//! - `validation.rs` - opt-in RFC 1123/1035 checks and `NamingError`

mod metadata;
mod names;
mod role;
pub mod validation;

pub use metadata::{child_labels, child_meta, selector_labels};
pub use names::{try_child_names, ChildNames, ChildRef};
pub use role::{ChildKind, ChildRole};
pub use validation::NamingError;

use crate::constants::NAME_DEPLOYMENT_TRUSTED_CA;
use crate::crd::Cincinnati;
use kube::Resource;

/// Parent name used for derivation
///
/// A parent without `metadata.name` derives from the empty string.
pub fn parent_name(instance: &Cincinnati) -> &str {
    instance.meta().name.as_deref().unwrap_or_default()
}

/// Name of the operand Deployment
pub fn name_deployment(instance: &Cincinnati) -> String {
    ChildRole::Deployment.name_for(instance)
}

/// Name of the PodDisruptionBudget guarding the operand Deployment
pub fn name_pod_disruption_budget(instance: &Cincinnati) -> String {
    ChildRole::PodDisruptionBudget.name_for(instance)
}

/// Name of the ConfigMap holding the operand environment
pub fn name_env_config(instance: &Cincinnati) -> String {
    ChildRole::EnvConfig.name_for(instance)
}

/// Name of the ConfigMap holding the graph builder and policy engine configuration
pub fn name_config(instance: &Cincinnati) -> String {
    ChildRole::Config.name_for(instance)
}

/// Name of the policy engine Service
pub fn name_policy_engine_service(instance: &Cincinnati) -> String {
    ChildRole::PolicyEngineService.name_for(instance)
}

/// Name of the graph builder Service
pub fn name_graph_builder_service(instance: &Cincinnati) -> String {
    ChildRole::GraphBuilderService.name_for(instance)
}

/// Name of the per-instance copy of the additional trusted CA
pub fn name_additional_trusted_ca(instance: &Cincinnati) -> String {
    ChildRole::TrustedCaConfig.name_for(instance)
}

/// Name of the namespace-wide trusted CA bundle
///
/// Shared by every `Cincinnati` in the namespace, so it takes no instance.
pub fn name_deployment_trusted_ca() -> &'static str {
    NAME_DEPLOYMENT_TRUSTED_CA
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::CincinnatiSpec;
    use std::collections::HashSet;

    fn instance(name: &str) -> Cincinnati {
        Cincinnati::new(
            name,
            CincinnatiSpec {
                replicas: 1,
                registry: "quay.io".to_string(),
                repository: "openshift-release-dev/ocp-release".to_string(),
                graph_data_image: "quay.io/example/graph-data:latest".to_string(),
            },
        )
    }

    #[test]
    fn test_names_for_example_instance() {
        let cinci = instance("example");
        assert_eq!(name_deployment(&cinci), "example");
        assert_eq!(name_pod_disruption_budget(&cinci), "example");
        assert_eq!(name_env_config(&cinci), "example-env");
        assert_eq!(name_config(&cinci), "example-config");
        assert_eq!(name_policy_engine_service(&cinci), "example-policy-engine");
        assert_eq!(name_graph_builder_service(&cinci), "example-graph-builder");
        assert_eq!(name_additional_trusted_ca(&cinci), "example-trusted-ca");
        assert_eq!(name_deployment_trusted_ca(), "trusted-ca");
    }

    #[test]
    fn test_empty_name_yields_degenerate_names() {
        // Reproduced as-is; admission is expected to reject empty parent names
        let cinci = instance("");
        assert_eq!(name_deployment(&cinci), "");
        assert_eq!(name_pod_disruption_budget(&cinci), "");
        assert_eq!(name_env_config(&cinci), "-env");
        assert_eq!(name_config(&cinci), "-config");
        assert_eq!(name_policy_engine_service(&cinci), "-policy-engine");
        assert_eq!(name_graph_builder_service(&cinci), "-graph-builder");
        assert_eq!(name_additional_trusted_ca(&cinci), "-trusted-ca");
        assert_eq!(name_deployment_trusted_ca(), "trusted-ca");
    }

    #[test]
    fn test_missing_metadata_name_is_empty() {
        let mut cinci = instance("example");
        cinci.metadata.name = None;
        assert_eq!(parent_name(&cinci), "");
        assert_eq!(name_config(&cinci), "-config");
    }

    #[test]
    fn test_derivation_is_repeatable() {
        let first = instance("cincinnati-prod");
        let second = instance("cincinnati-prod");
        for role in ChildRole::ALL {
            assert_eq!(role.name_for(&first), role.name_for(&second));
            assert_eq!(role.name_for(&first), role.name_for(&first));
        }
    }

    #[test]
    fn test_suffixed_names_are_distinct() {
        let cinci = instance("example");
        let suffixed: HashSet<String> = ChildRole::ALL
            .iter()
            .filter(|role| role.suffix().is_some())
            .map(|role| role.name_for(&cinci))
            .collect();
        assert_eq!(suffixed.len(), 5);
    }

    #[test]
    fn test_trusted_ca_ignores_instance() {
        for name in ["", "example", "trusted-ca", "a.b.c"] {
            assert_eq!(
                ChildRole::TrustedCaDeployment.name_for(&instance(name)),
                "trusted-ca"
            );
        }
    }
}
