//! Bulk-element read interface and face (boundary) elements
//!
//! Bulk elements discretize the interior PDE on the meridian plane; face
//! elements are lower-dimensional elements attached to one face of a bulk
//! element, used by the boundary assemblers in [`crate::boundary`].

mod bulk;
mod face;

pub use bulk::*;
pub use face::*;

use thiserror::Error;

/// Errors raised when a boundary element attaches to a bulk element
///
/// These are configuration errors, fatal and detected at construction
/// time; nothing retries them. Numerical degeneracy during assembly is not
/// an error; it surfaces as a non-finite result plus a log warning.
#[derive(Debug, Error)]
pub enum ElementError {
    /// The bulk element cannot supply the complex degree-of-freedom indices
    #[error(
        "{context}: bulk element does not expose the Fourier-decomposed \
         Helmholtz equations interface"
    )]
    MissingEquationsInterface {
        /// Name of the attaching element type
        context: &'static str,
    },
}
