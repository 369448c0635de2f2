//! Numerical quadrature rules for boundary and bulk integration
//!
//! Provides Gauss-Legendre rules on the reference line segment (for face
//! elements) and their tensor products on the reference quadrilateral
//! (for the meridian-plane bulk elements).

mod gauss;
mod rules;

pub use gauss::*;
pub use rules::*;
