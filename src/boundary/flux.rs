//! Prescribed-flux face elements for the Fourier-decomposed Helmholtz
//! equations
//!
//! Imposes a complex Neumann flux f on a boundary by adding
//! -∫_Γ f ψ_l r dΓ to the residuals of the real and imaginary nodal
//! unknowns, where r is the radial meridian coordinate (the axisymmetric
//! measure factor).

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::element::{
    BulkElement, ComplexDofPair, ElementError, Face, FaceGeometry, LineFaceElement,
};
use crate::mesh::NodeStore;

/// Prescribed-flux function: (r, z) -> complex flux
pub type FluxFn = Box<dyn Fn(f64, f64) -> Complex64>;

/// Face element that imposes a prescribed complex flux on one face of a
/// bulk Helmholtz element
///
/// The element is bound to its bulk element and face exactly once, at
/// construction; there is no rebinding and no default construction.
pub struct FluxElement<'a, E: BulkElement> {
    face: LineFaceElement<'a, E>,
    u_index: ComplexDofPair,
    flux_fn: Option<FluxFn>,
}

impl<'a, E: BulkElement> std::fmt::Debug for FluxElement<'a, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluxElement")
            .field("u_index", &self.u_index)
            .field("flux_fn", &self.flux_fn.as_ref().map(|_| "<fn>"))
            .finish_non_exhaustive()
    }
}

impl<'a, E: BulkElement> FluxElement<'a, E> {
    /// Attach a flux element to one face of `bulk`
    ///
    /// Fails if the bulk element does not expose the Fourier-decomposed
    /// Helmholtz interface; that is a configuration error detected here,
    /// at construction, rather than during assembly.
    pub fn attach(bulk: &'a E, face: Face) -> Result<Self, ElementError> {
        let eqs = bulk
            .as_fourier_helmholtz()
            .ok_or(ElementError::MissingEquationsInterface {
                context: "FluxElement::attach",
            })?;
        let u_index = eqs.u_index_fourier_helmholtz();

        Ok(Self {
            face: LineFaceElement::new(bulk, face),
            u_index,
            flux_fn: None,
        })
    }

    /// Set the prescribed-flux function; unset means zero flux
    pub fn set_flux_fn<F>(&mut self, flux_fn: F)
    where
        F: Fn(f64, f64) -> Complex64 + 'static,
    {
        self.flux_fn = Some(Box::new(flux_fn));
    }

    /// Indices of the complex unknown, as read from the bulk element
    pub fn u_index(&self) -> ComplexDofPair {
        self.u_index
    }

    /// Replace the face quadrature rule
    pub fn set_quadrature_order(&mut self, order: usize) {
        self.face.set_quadrature_order(order);
    }

    /// Evaluate the prescribed flux at a global position
    fn flux(&self, x: [f64; 2]) -> Complex64 {
        match &self.flux_fn {
            Some(f) => f(x[0], x[1]),
            None => Complex64::new(0.0, 0.0),
        }
    }

    /// Add this element's contribution to the residual vector
    ///
    /// Contributions are additive; the caller owns (and resets) the buffer.
    pub fn accumulate_residual(&self, nodes: &NodeStore, residuals: &mut Array1<f64>) {
        for qp in self.face.quadrature_points() {
            let s = &qp.coords[..1];
            let w = qp.weight;

            // Shape functions double as test functions (Galerkin)
            let psi = self.face.shape(s);
            let j = self.face.j_eulerian(s, nodes);
            let big_w = w * j;

            let x = self.face.interpolated_position(s, nodes);
            let r = x[0];

            let flux = self.flux(x);

            for (l, &psi_l) in psi.iter().enumerate() {
                let node = self.face.node_id(l);

                let eqn_re = nodes.eqn(node, self.u_index.re);
                if eqn_re >= 0 {
                    residuals[eqn_re as usize] -= flux.re * psi_l * r * big_w;
                }

                let eqn_im = nodes.eqn(node, self.u_index.im);
                if eqn_im >= 0 {
                    residuals[eqn_im as usize] -= flux.im * psi_l * r * big_w;
                }
            }
        }
    }

    /// Add this element's contribution to the residual vector and the
    /// Jacobian matrix
    ///
    /// The prescribed flux does not depend on the unknowns, so the Jacobian
    /// contribution is identically zero: the buffer is accepted for
    /// interface uniformity and left untouched.
    pub fn accumulate_residual_and_jacobian(
        &self,
        nodes: &NodeStore,
        residuals: &mut Array1<f64>,
        _jacobian: &mut Array2<f64>,
    ) {
        self.accumulate_residual(nodes, residuals);
    }
}
