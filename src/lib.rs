//! Cincinnati Operator Library
//!
//! Naming of the child objects the operator owns for each `Cincinnati` resource,
//! plus the CRD type, configuration and logging shared by the binaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use cincinnati_operator::prelude::*;
//!
//! let cinci = Cincinnati::new(
//!     "example",
//!     CincinnatiSpec {
//!         replicas: 1,
//!         registry: "quay.io".to_string(),
//!         repository: "openshift-release-dev/ocp-release".to_string(),
//!         graph_data_image: "quay.io/example/graph-data:latest".to_string(),
//!     },
//! );
//! assert_eq!(ChildRole::Config.name_for(&cinci), "example-config");
//! ```

pub mod config;
pub mod constants;
pub mod crd;
pub mod naming;
pub mod observability;
pub mod prelude;
