//! Boundary-integral assembly over face elements
//!
//! Provides implementations for:
//! - Prescribed complex flux (Neumann) conditions: residual contributions
//!   only (the flux does not depend on the unknowns, so there is no
//!   Jacobian contribution)
//! - Radiated-power monitoring across an artificial truncation boundary
//!
//! Both carry the axisymmetric measure: integrands are weighted by the
//! radial meridian coordinate.

mod flux;
mod power;

pub use flux::*;
pub use power::*;
