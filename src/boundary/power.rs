//! Radiated-power monitors for the far-field truncation boundary
//!
//! Computes the element contribution to the time-averaged radiated power
//!
//! P = π ∫_Γ r (Re φ · Im ∂φ/∂n − Im φ · Re ∂φ/∂n) dΓ
//!
//! where φ is the complex field and ∂φ/∂n its derivative along the outward
//! unit normal. The normal derivative is reconstructed from the *bulk*
//! element's shape-function derivatives, evaluated at the bulk-local
//! coordinate corresponding to each boundary quadrature point; boundary and
//! bulk quadrature rules are generally incommensurate, so this re-embedding
//! is what makes the monitor exact.
//!
//! The formula assumes the constitutive parameters of the medium are
//! uniform over the boundary; if they genuinely vary, the result is only an
//! approximation.

use std::f64::consts::PI;

use num_complex::Complex64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::element::{
    BulkElement, ComplexDofPair, ElementError, Face, FaceGeometry, LineFaceElement,
};
use crate::mesh::NodeStore;

/// Per-quadrature-point power-density sample for diagnostic traces
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerSample {
    /// Global (r, z) position of the sample point
    pub position: [f64; 2],
    /// Zenith angle atan2(r, z) of the sample point
    pub theta: f64,
    /// Signed power-density integrand at the sample point
    pub density: f64,
}

/// Face element that monitors the time-averaged power radiated through one
/// face of a bulk Helmholtz element
///
/// Bound to its bulk element and face exactly once, at construction.
pub struct PowerMonitorElement<'a, E: BulkElement> {
    face: LineFaceElement<'a, E>,
    u_index: ComplexDofPair,
}

impl<'a, E: BulkElement> PowerMonitorElement<'a, E> {
    /// Attach a power monitor to one face of `bulk`
    ///
    /// Fails if the bulk element does not expose the Fourier-decomposed
    /// Helmholtz interface.
    pub fn attach(bulk: &'a E, face: Face) -> Result<Self, ElementError> {
        let eqs = bulk
            .as_fourier_helmholtz()
            .ok_or(ElementError::MissingEquationsInterface {
                context: "PowerMonitorElement::attach",
            })?;
        let u_index = eqs.u_index_fourier_helmholtz();

        Ok(Self {
            face: LineFaceElement::new(bulk, face),
            u_index,
        })
    }

    /// Indices of the complex unknown, as read from the bulk element
    pub fn u_index(&self) -> ComplexDofPair {
        self.u_index
    }

    /// Replace the face quadrature rule
    pub fn set_quadrature_order(&mut self, order: usize) {
        self.face.set_quadrature_order(order);
    }

    /// This element's contribution to the time-averaged radiated power
    pub fn total_power(&self, nodes: &NodeStore) -> f64 {
        self.total_power_traced(nodes, |_| {})
    }

    /// Same as [`total_power`](Self::total_power), but also hands every
    /// per-quadrature-point density sample to `sink`
    ///
    /// The trace is purely diagnostic and does not affect the returned
    /// total. Degenerate geometry (an outward normal that cannot be
    /// normalised) propagates into a non-finite total rather than being
    /// masked.
    pub fn total_power_traced<F>(&self, nodes: &NodeStore, mut sink: F) -> f64
    where
        F: FnMut(PowerSample),
    {
        let bulk = self.face.bulk();
        let mut power = 0.0;

        for qp in self.face.quadrature_points() {
            let s = &qp.coords[..1];

            let unit_normal = self.face.outer_unit_normal(s, nodes);

            let w = qp.weight;
            let j = self.face.j_eulerian(s, nodes);
            let big_w = w * j;

            // Boundary quadrature points are not quadrature points of the
            // bulk element: evaluate the bulk derivatives at the embedded
            // local coordinate.
            let s_bulk = self.face.local_coordinate_in_bulk(s);
            let bulk_shape = bulk.dshape_eulerian(s_bulk, nodes);
            let psi = self.face.shape(s);

            // Complex gradient from the bulk element's nodal values
            let mut dphi_dx = [Complex64::new(0.0, 0.0); 2];
            for l in 0..bulk.num_nodes() {
                let node = bulk.node_id(l);
                let phi_l = Complex64::new(
                    nodes.value(node, self.u_index.re),
                    nodes.value(node, self.u_index.im),
                );
                for i in 0..2 {
                    dphi_dx[i] += phi_l * bulk_shape.dpsi_dx[l][i];
                }
            }

            // Field value from the face's own nodal values
            let mut phi = Complex64::new(0.0, 0.0);
            for (l, &psi_l) in psi.iter().enumerate() {
                let node = self.face.node_id(l);
                let phi_l = Complex64::new(
                    nodes.value(node, self.u_index.re),
                    nodes.value(node, self.u_index.im),
                );
                phi += phi_l * psi_l;
            }

            // Project the gradient onto the outward normal
            let mut dphi_dn = Complex64::new(0.0, 0.0);
            for i in 0..2 {
                dphi_dn += dphi_dx[i] * unit_normal[i];
            }

            let integrand = phi.re * dphi_dn.im - phi.im * dphi_dn.re;

            let x = self.face.interpolated_position(s, nodes);
            let theta = x[0].atan2(x[1]);
            sink(PowerSample {
                position: x,
                theta,
                density: integrand,
            });

            power += PI * x[0] * integrand * big_w;
        }

        power
    }
}

/// Sum the power contributions of all monitors on a truncation boundary
///
/// Each element reads only its own nodes, so the contributions are summed
/// in parallel.
pub fn total_radiated_power<E>(monitors: &[PowerMonitorElement<'_, E>], nodes: &NodeStore) -> f64
where
    E: BulkElement + Sync,
{
    monitors
        .par_iter()
        .map(|monitor| monitor.total_power(nodes))
        .sum()
}
