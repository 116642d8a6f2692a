//! # Constants
//!
//! Well-known names shared by the operator and the workloads it manages.
//!
//! None of these are derived from a `Cincinnati` instance. Parent-scoped child
//! names live in [`crate::naming`].

/// Name of the graph builder container in the operand pod
pub const NAME_CONTAINER_GRAPH_BUILDER: &str = "graph-builder";

/// Name of the policy engine container in the operand pod
pub const NAME_CONTAINER_POLICY_ENGINE: &str = "policy-engine";

/// Name of the init container that unpacks the graph data image
pub const NAME_INIT_CONTAINER_GRAPH_DATA: &str = "graph-data";

/// Namespace holding the cluster-wide OpenShift configuration,
/// including the additional trusted CA bundle
pub const OPENSHIFT_CONFIG_NAMESPACE: &str = "openshift-config";

/// Trusted CA bundle shared by every `Cincinnati` in a namespace
pub const NAME_DEPLOYMENT_TRUSTED_CA: &str = "trusted-ca";

// Child name suffixes, appended to the parent's `metadata.name`
pub const SUFFIX_ENV_CONFIG: &str = "-env";
pub const SUFFIX_CONFIG: &str = "-config";
pub const SUFFIX_POLICY_ENGINE_SERVICE: &str = "-policy-engine";
pub const SUFFIX_GRAPH_BUILDER_SERVICE: &str = "-graph-builder";
pub const SUFFIX_TRUSTED_CA: &str = "-trusted-ca";

// Kubernetes recommended labels
// https://kubernetes.io/docs/concepts/overview/working-with-objects/common-labels/
pub const LABEL_NAME: &str = "app.kubernetes.io/name";
pub const LABEL_INSTANCE: &str = "app.kubernetes.io/instance";
pub const LABEL_COMPONENT: &str = "app.kubernetes.io/component";
pub const LABEL_MANAGED_BY: &str = "app.kubernetes.io/managed-by";
pub const LABEL_PART_OF: &str = "app.kubernetes.io/part-of";

/// Value of `app.kubernetes.io/name` and `app.kubernetes.io/part-of`
pub const APP_NAME: &str = "cincinnati";

/// Default value of `app.kubernetes.io/managed-by`
pub const DEFAULT_OPERATOR_NAME: &str = "cincinnati-operator";

/// Default namespace the operator runs in
pub const DEFAULT_OPERATOR_NAMESPACE: &str = "openshift-update-service";

/// Maximum length of an RFC 1123 subdomain (most object names)
pub const MAX_SUBDOMAIN_LENGTH: usize = 253;

/// Maximum length of an RFC 1035 label (Service names)
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of a label value (the parent name is the `instance` label value)
pub const MAX_LABEL_VALUE_LENGTH: usize = 63;
