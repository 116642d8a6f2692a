//! # Cincinnati Spec
//!
//! Main CRD specification types and default values.

use serde::{Deserialize, Serialize};

/// Cincinnati Custom Resource Definition
///
/// One `Cincinnati` describes an OpenShift Update Service deployment. The operator
/// owns a set of child objects per instance, named by [`crate::naming`].
///
/// # Example
///
/// ```yaml
/// apiVersion: cincinnati.openshift.io/v1alpha1
/// kind: Cincinnati
/// metadata:
///   name: example
///   namespace: openshift-update-service
/// spec:
///   replicas: 2
///   registry: quay.io
///   repository: openshift-release-dev/ocp-release
///   graphDataImage: quay.io/example/graph-data:latest
/// ```
#[derive(kube::CustomResource, Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "Cincinnati",
    group = "cincinnati.openshift.io",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::CincinnatiStatus",
    shortname = "cinci",
    printcolumn = r#"{"name":"Replicas", "type":"integer", "jsonPath":".spec.replicas"}, {"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"ReconcileCompleted\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct CincinnatiSpec {
    /// Number of operand pods
    /// Default: 1
    #[serde(default = "default_replicas")]
    pub replicas: i32,
    /// Container registry holding release images
    /// Example: "quay.io"
    pub registry: String,
    /// Repository within the registry holding release images
    /// Example: "openshift-release-dev/ocp-release"
    pub repository: String,
    /// Container image unpacked by the graph-data init container
    pub graph_data_image: String,
}

/// Default value for replicas
pub fn default_replicas() -> i32 {
    1
}
