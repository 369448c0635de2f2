//! Shared nodal storage for the meridian-plane mesh
//!
//! Elements never own nodes; they reference them by index into a central
//! [`NodeStore`] that is built (and mutated) by the caller.

mod nodes;

pub use nodes::*;
