//! # Prelude
//!
//! Re-exports commonly used types for convenience.
//!
//! ## Usage
//!
//! ```rust
//! use cincinnati_operator::prelude::*;
//! ```
//!
//! This brings into scope:
//! - CRD types (`Cincinnati`, `CincinnatiSpec`, `CincinnatiStatus`)
//! - Naming types (`ChildRole`, `ChildKind`, `ChildNames`, `ChildRef`, `NamingError`)
//! - Config types (`OperatorConfig`)

// CRD types
pub use crate::crd::{Cincinnati, CincinnatiSpec, CincinnatiStatus};

// Naming types - most commonly used together
pub use crate::naming::{
    child_meta, try_child_names, ChildKind, ChildNames, ChildRef, ChildRole, NamingError,
};

// Config types
pub use crate::config::OperatorConfig;
