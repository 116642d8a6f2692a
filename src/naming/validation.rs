//! # Name Validation
//!
//! Opt-in checks of parent and child names against Kubernetes object naming rules.
//!
//! The plain derivation functions never fail. These checks let a caller catch a
//! name the API server would reject before building the object:
//! - Most kinds: RFC 1123 DNS subdomain, at most 253 characters
//! - Service: RFC 1035 DNS label, at most 63 characters
//! - Parent name as the `app.kubernetes.io/instance` label value, at most 63 characters
//!
//! Reference: https://kubernetes.io/docs/concepts/overview/working-with-objects/names/

use crate::constants::{
    LABEL_INSTANCE, MAX_LABEL_LENGTH, MAX_LABEL_VALUE_LENGTH, MAX_SUBDOMAIN_LENGTH,
};
use crate::crd::Cincinnati;
use crate::naming::role::{ChildKind, ChildRole};
use regex::Regex;
use thiserror::Error;
use tracing::warn;

const SUBDOMAIN_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
const LABEL_PATTERN: &str = r"^[a-z]([-a-z0-9]*[a-z0-9])?$";
const LABEL_VALUE_PATTERN: &str = r"^[a-z0-9A-Z]([-a-z0-9A-Z_.]*[a-z0-9A-Z])?$";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("invalid Cincinnati name '{name}': {reason}")]
    InvalidParentName { name: String, reason: String },

    #[error("invalid {role} name '{name}' ({kind}): {reason}")]
    InvalidChildName {
        role: ChildRole,
        kind: ChildKind,
        name: String,
        reason: String,
    },

    #[error("invalid value '{value}' for label {key}: {reason}")]
    InvalidLabelValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("unknown child role '{0}'")]
    UnknownRole(String),

    #[error("failed to compile name pattern: {0}")]
    Pattern(String),
}

/// Validate a `Cincinnati` name as an RFC 1123 subdomain
pub fn validate_parent_name(name: &str) -> Result<(), NamingError> {
    check_subdomain(name)?.map_or(Ok(()), |reason| {
        warn!(name = %name, reason = %reason, "Rejected Cincinnati name");
        Err(NamingError::InvalidParentName {
            name: name.to_string(),
            reason,
        })
    })
}

/// Validate a label value
///
/// Label values may be empty; otherwise they are at most 63 characters of
/// alphanumerics, '-', '_' or '.', starting and ending with an alphanumeric.
/// Reference: https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/#syntax-and-character-set
pub fn validate_label_value(key: &str, value: &str) -> Result<(), NamingError> {
    if value.is_empty() {
        return Ok(());
    }

    let reason = if value.len() > MAX_LABEL_VALUE_LENGTH {
        Some(format!(
            "must be no more than {MAX_LABEL_VALUE_LENGTH} characters (got {})",
            value.len()
        ))
    } else {
        let label_value_regex = Regex::new(LABEL_VALUE_PATTERN)
            .map_err(|e| NamingError::Pattern(e.to_string()))?;
        (!label_value_regex.is_match(value)).then(|| {
            "must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character"
                .to_string()
        })
    };

    reason.map_or(Ok(()), |reason| {
        warn!(key = %key, value = %value, reason = %reason, "Rejected label value");
        Err(NamingError::InvalidLabelValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        })
    })
}

/// Validate a parent name as an object name and as its `instance` label value
pub(crate) fn validate_parent_identity(name: &str) -> Result<(), NamingError> {
    validate_parent_name(name)?;
    validate_label_value(LABEL_INSTANCE, name)
}

/// Validate a derived child name against the rules for the role's kind
pub fn validate_child_name(role: ChildRole, name: &str) -> Result<(), NamingError> {
    let violation = match role.kind() {
        ChildKind::Service => check_label(name)?,
        ChildKind::Deployment | ChildKind::PodDisruptionBudget | ChildKind::ConfigMap => {
            check_subdomain(name)?
        }
    };

    violation.map_or(Ok(()), |reason| {
        warn!(
            role = %role,
            kind = %role.kind(),
            name = %name,
            reason = %reason,
            "Rejected derived child name"
        );
        Err(NamingError::InvalidChildName {
            role,
            kind: role.kind(),
            name: name.to_string(),
            reason,
        })
    })
}

impl ChildRole {
    /// Derive the child name and reject it if the API server would
    ///
    /// The parent name is checked first, both as an object name and as the
    /// `instance` label value the child carries. The namespace-wide trusted CA
    /// depends on neither.
    pub fn try_name_for(&self, instance: &Cincinnati) -> Result<String, NamingError> {
        if self.is_parent_scoped() {
            validate_parent_identity(super::parent_name(instance))?;
        }
        let name = self.name_for(instance);
        validate_child_name(*self, &name)?;
        Ok(name)
    }
}

// Returns the first rule violation, if any
fn check_subdomain(name: &str) -> Result<Option<String>, NamingError> {
    if name.is_empty() {
        return Ok(Some("must not be empty".to_string()));
    }
    if name.len() > MAX_SUBDOMAIN_LENGTH {
        return Ok(Some(format!(
            "must be no more than {MAX_SUBDOMAIN_LENGTH} characters (got {})",
            name.len()
        )));
    }
    let subdomain_regex =
        Regex::new(SUBDOMAIN_PATTERN).map_err(|e| NamingError::Pattern(e.to_string()))?;
    if !subdomain_regex.is_match(name) {
        return Ok(Some(
            "must consist of lowercase alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character"
                .to_string(),
        ));
    }
    Ok(None)
}

fn check_label(name: &str) -> Result<Option<String>, NamingError> {
    if name.is_empty() {
        return Ok(Some("must not be empty".to_string()));
    }
    if name.len() > MAX_LABEL_LENGTH {
        return Ok(Some(format!(
            "must be no more than {MAX_LABEL_LENGTH} characters (got {})",
            name.len()
        )));
    }
    let label_regex =
        Regex::new(LABEL_PATTERN).map_err(|e| NamingError::Pattern(e.to_string()))?;
    if !label_regex.is_match(name) {
        return Ok(Some(
            "must consist of lowercase alphanumeric characters or '-', start with a letter, and end with an alphanumeric character"
                .to_string(),
        ));
    }
    Ok(None)
}
