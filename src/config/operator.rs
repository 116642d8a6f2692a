//! # Operator Configuration
//!
//! Operator-level settings loaded from environment variables.

use crate::constants::{DEFAULT_OPERATOR_NAME, DEFAULT_OPERATOR_NAMESPACE};

/// Operator-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
/// Environment variables are populated from a ConfigMap using `envFrom` in the deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorConfig {
    /// Reject child names the API server would refuse instead of passing them through
    pub strict_names: bool,
    /// Namespace where the operator is deployed
    pub operator_namespace: String,
    /// Value of the `app.kubernetes.io/managed-by` label on child objects
    pub operator_name: String,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            strict_names: false,
            operator_namespace: DEFAULT_OPERATOR_NAMESPACE.to_string(),
            operator_name: DEFAULT_OPERATOR_NAME.to_string(),
            log_level: "INFO".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl OperatorConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Lets tests supply variables without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            strict_names: var_or_default_bool(&lookup, "CINCINNATI_STRICT_NAMES", defaults.strict_names),
            operator_namespace: var_or_default_str(&lookup, "POD_NAMESPACE", &defaults.operator_namespace),
            operator_name: var_or_default_str(&lookup, "OPERATOR_NAME", &defaults.operator_name),
            log_level: var_or_default_str(&lookup, "LOG_LEVEL", &defaults.log_level),
            log_format: var_or_default_str(&lookup, "LOG_FORMAT", &defaults.log_format),
        }
    }

    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Read variable as boolean or return default
fn var_or_default_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| {
            let v_lower = v.to_lowercase();
            v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
        })
        .unwrap_or(default)
}

/// Read variable as string or return default
fn var_or_default_str<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = OperatorConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, OperatorConfig::default());
        assert!(!config.strict_names);
        assert_eq!(config.operator_name, "cincinnati-operator");
        assert_eq!(config.operator_namespace, "openshift-update-service");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_overrides() {
        let config = OperatorConfig::from_lookup(lookup_from(&[
            ("CINCINNATI_STRICT_NAMES", "YES"),
            ("POD_NAMESPACE", "osus"),
            ("OPERATOR_NAME", "updateservice-operator"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FORMAT", "JSON"),
        ]));
        assert!(config.strict_names);
        assert_eq!(config.operator_namespace, "osus");
        assert_eq!(config.operator_name, "updateservice-operator");
        assert_eq!(config.log_level, "DEBUG");
        assert!(config.json_logs());
    }

    #[test]
    fn test_unrecognized_bool_is_false() {
        let config =
            OperatorConfig::from_lookup(lookup_from(&[("CINCINNATI_STRICT_NAMES", "enabled")]));
        assert!(!config.strict_names);
    }
}
