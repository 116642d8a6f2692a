//! # CRD Validation Tests
//!
//! Tests that sample `Cincinnati` manifests deserialize into the CRD types and that
//! the generated CRD carries the expected schema settings.

use cincinnati_operator::crd::Cincinnati;
use cincinnati_operator::naming::{name_config, name_deployment, ChildNames};
use kube::CustomResourceExt;

/// Test a full manifest with status
#[test]
fn test_cincinnati_with_status() {
    let yaml = r#"
apiVersion: cincinnati.openshift.io/v1alpha1
kind: Cincinnati
metadata:
  name: example
  namespace: openshift-update-service
  uid: 6d0e9f3a-7d1c-4c5e-8a2b-9f1e0c3d4b5a
spec:
  replicas: 2
  registry: quay.io
  repository: openshift-release-dev/ocp-release
  graphDataImage: quay.io/example/graph-data:latest
status:
  observedGeneration: 3
  conditions:
    - type: ReconcileCompleted
      status: "True"
      reason: Success
"#;

    let cinci: Cincinnati =
        serde_yaml::from_str(yaml).expect("Should deserialize Cincinnati with status");

    assert_eq!(cinci.spec.replicas, 2);
    assert_eq!(cinci.spec.registry, "quay.io");
    assert_eq!(cinci.spec.repository, "openshift-release-dev/ocp-release");
    assert_eq!(
        cinci.spec.graph_data_image,
        "quay.io/example/graph-data:latest"
    );

    let status = cinci.status.as_ref().expect("status should be present");
    assert_eq!(status.observed_generation, Some(3));
    assert_eq!(status.conditions.len(), 1);
    assert_eq!(status.conditions[0].r#type, "ReconcileCompleted");
    assert_eq!(status.conditions[0].status, "True");
    assert_eq!(status.conditions[0].reason.as_deref(), Some("Success"));
    assert!(status.conditions[0].message.is_none());

    // Names come from metadata.name only
    assert_eq!(name_deployment(&cinci), "example");
    assert_eq!(name_config(&cinci), "example-config");
}

/// Test that replicas defaults to 1
#[test]
fn test_cincinnati_minimal() {
    let yaml = r#"
apiVersion: cincinnati.openshift.io/v1alpha1
kind: Cincinnati
metadata:
  name: minimal
spec:
  registry: quay.io
  repository: openshift-release-dev/ocp-release
  graphDataImage: quay.io/example/graph-data:latest
"#;

    let cinci: Cincinnati = serde_yaml::from_str(yaml).expect("Should deserialize minimal Cincinnati");
    assert_eq!(cinci.spec.replicas, 1);
    assert!(cinci.status.is_none());
    assert!(cinci.metadata.namespace.is_none());
    assert_eq!(ChildNames::for_instance(&cinci).env_config, "minimal-env");
}

/// Test that required spec fields are enforced
#[test]
fn test_cincinnati_missing_graph_data_image() {
    let yaml = r#"
apiVersion: cincinnati.openshift.io/v1alpha1
kind: Cincinnati
metadata:
  name: broken
spec:
  registry: quay.io
  repository: openshift-release-dev/ocp-release
"#;

    let result: Result<Cincinnati, _> = serde_yaml::from_str(yaml);
    assert!(result.is_err(), "graphDataImage is required");
}

/// Test generated CRD metadata
#[test]
fn test_generated_crd() {
    let crd = Cincinnati::crd();

    assert_eq!(
        crd.metadata.name.as_deref(),
        Some("cincinnatis.cincinnati.openshift.io")
    );
    assert_eq!(crd.spec.group, "cincinnati.openshift.io");
    assert_eq!(crd.spec.scope, "Namespaced");
    assert_eq!(crd.spec.names.kind, "Cincinnati");
    assert_eq!(crd.spec.names.plural, "cincinnatis");
    assert_eq!(
        crd.spec.names.short_names.as_deref(),
        Some(&["cinci".to_string()][..])
    );

    let version = &crd.spec.versions[0];
    assert_eq!(version.name, "v1alpha1");
    assert!(version.served);
    assert!(version.storage);
    assert!(
        version
            .subresources
            .as_ref()
            .and_then(|s| s.status.as_ref())
            .is_some(),
        "status subresource should be enabled"
    );
}
