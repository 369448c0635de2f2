//! Boundary-integral assembly for the Fourier-decomposed Helmholtz equation
//!
//! This crate provides the boundary-element machinery for finite element
//! discretizations of the azimuthally decomposed Helmholtz equation on a 2D
//! meridian-plane mesh. The complex unknown is split into independent real
//! and imaginary nodal degrees of freedom; every boundary integral carries
//! the axisymmetric measure factor (the radial coordinate of the meridian
//! plane).
//!
//! # Features
//!
//! - **Prescribed-flux elements**: impose a complex Neumann flux on a
//!   boundary by adding surface integrals to the residuals (zero Jacobian
//!   contribution by construction)
//! - **Power monitors**: time-averaged radiated power across an artificial
//!   truncation boundary, with an optional per-quadrature-point density trace
//! - **Q1/Q2 quadrilateral bulk elements** on the (r, z) meridian plane,
//!   with face elements that re-embed boundary quadrature points into the
//!   bulk element's local coordinates
//!
//! # Example
//!
//! ```ignore
//! use axifem::boundary::FluxElement;
//! use axifem::element::{Face, QFourierHelmholtzElement};
//! use num_complex::Complex64;
//!
//! // Attach a flux element to the bottom face of a bulk element
//! let mut flux = FluxElement::attach(&bulk, Face::S1Min)?;
//! flux.set_flux_fn(|r, _z| Complex64::new(r, 0.0));
//! flux.accumulate_residual(&nodes, &mut residuals);
//! ```

pub mod basis;
pub mod boundary;
pub mod element;
pub mod mesh;
pub mod quadrature;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
