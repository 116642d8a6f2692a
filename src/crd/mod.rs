//! # Custom Resource Definitions
//!
//! CRD types for the Cincinnati operator.
//!
//! ## Module Structure
//!
//! - `spec.rs` - `Cincinnati` specification and default values
//! - `status.rs` - Status types reported by the reconciler

mod spec;
mod status;

pub use spec::{default_replicas, Cincinnati, CincinnatiSpec};
pub use status::{CincinnatiStatus, Condition};
