//! # CRD Generator
//!
//! Generates the `Cincinnati` CustomResourceDefinition YAML from the Rust types.
//!
//! ## Usage
//!
//! ```bash
//! # Generate CRD YAML
//! cargo run --bin crdgen > config/crd/cincinnati.openshift.io_cincinnatis.yaml
//!
//! # Generate and apply directly
//! cargo run --bin crdgen | kubectl apply -f -
//! ```

use anyhow::{Context, Result};
use cincinnati_operator::crd::Cincinnati;
use kube::CustomResourceExt;

fn main() -> Result<()> {
    let crd = Cincinnati::crd();
    let yaml = serde_yaml::to_string(&crd).context("Failed to serialize CRD to YAML")?;
    print!("{yaml}");
    Ok(())
}
