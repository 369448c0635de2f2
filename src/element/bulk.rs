//! Bulk element read interface and quadrilateral Helmholtz elements
//!
//! Boundary assembly only consumes a narrow read interface of the bulk
//! element: node ids, shape functions at arbitrary local coordinates and
//! their global-coordinate derivatives, and the indices at which the real
//! and imaginary parts of the complex unknown are stored. The interior PDE
//! residual and Jacobian are deliberately out of scope.

use serde::{Deserialize, Serialize};

use crate::basis::{
    Jacobian2, PolynomialDegree, q1_quadrilateral, q1_quadrilateral_grad, q2_quadrilateral,
    q2_quadrilateral_grad, quad_num_nodes,
};
use crate::element::face::Face;
use crate::mesh::NodeStore;

/// Value-storage slots of the real and imaginary parts of the complex
/// unknown at every node of an element
///
/// Fixed when the element is built and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexDofPair {
    /// Component index of the real part
    pub re: usize,
    /// Component index of the imaginary part
    pub im: usize,
}

/// Capability interface of elements that discretize the Fourier-decomposed
/// Helmholtz equations
///
/// Boundary elements query this at construction time to learn where the
/// complex unknown lives; a bulk element that cannot supply it is a
/// configuration error.
pub trait FourierHelmholtzEquations {
    /// Indices of (Re u, Im u) in each node's value array
    fn u_index_fourier_helmholtz(&self) -> ComplexDofPair {
        ComplexDofPair { re: 0, im: 1 }
    }
}

/// Bulk shape functions and their global-coordinate derivatives at one
/// local coordinate
#[derive(Debug, Clone)]
pub struct EulerianShape {
    /// Shape function values
    pub psi: Vec<f64>,
    /// Derivatives with respect to the global (r, z) coordinates
    pub dpsi_dx: Vec<[f64; 2]>,
    /// Determinant of the local-to-global Jacobian
    pub det_jacobian: f64,
}

/// Read interface of a bulk element consumed by its face elements
///
/// All evaluators take an *arbitrary* local coordinate, not a quadrature
/// point index: boundary quadrature points are generally not quadrature
/// points of the bulk element, so face elements re-embed them via
/// [`Face::bulk_coordinate`] and evaluate here.
pub trait BulkElement {
    /// Number of nodes
    fn num_nodes(&self) -> usize;

    /// Global node id of local node `l`
    fn node_id(&self, l: usize) -> usize;

    /// Local node numbers lying on `face`, ordered along the face coordinate
    fn face_nodes(&self, face: Face) -> Vec<usize>;

    /// Shape functions at a local coordinate
    fn shape(&self, s: [f64; 2]) -> Vec<f64>;

    /// Local-to-global Jacobian at a local coordinate
    fn local_jacobian(&self, s: [f64; 2], nodes: &NodeStore) -> Jacobian2;

    /// Shape functions and global-coordinate derivatives at a local
    /// coordinate
    fn dshape_eulerian(&self, s: [f64; 2], nodes: &NodeStore) -> EulerianShape;

    /// Capability query: the Fourier-decomposed Helmholtz interface, if the
    /// element implements those equations
    fn as_fourier_helmholtz(&self) -> Option<&dyn FourierHelmholtzEquations>;
}

/// Bilinear (Q1) or biquadratic (Q2) quadrilateral element for the
/// Fourier-decomposed Helmholtz equations on the (r, z) meridian plane
///
/// Nodes are ordered lexicographically: n = i + (p+1)*j with i running
/// along the first local coordinate. The element references its nodes by
/// index into a shared [`NodeStore`]; it owns no nodal data.
#[derive(Debug, Clone)]
pub struct QFourierHelmholtzElement {
    nodes: Vec<usize>,
    degree: PolynomialDegree,
}

impl QFourierHelmholtzElement {
    /// Create an element from its global node ids
    pub fn new(degree: PolynomialDegree, nodes: Vec<usize>) -> Self {
        assert_eq!(
            nodes.len(),
            quad_num_nodes(degree),
            "node count must match the polynomial degree"
        );
        Self { nodes, degree }
    }

    pub fn degree(&self) -> PolynomialDegree {
        self.degree
    }

    fn dshape_local(&self, s: [f64; 2]) -> (Vec<f64>, Vec<[f64; 2]>) {
        match self.degree {
            PolynomialDegree::P1 => (
                q1_quadrilateral(s[0], s[1]).to_vec(),
                q1_quadrilateral_grad(s[0], s[1]).to_vec(),
            ),
            PolynomialDegree::P2 => (
                q2_quadrilateral(s[0], s[1]).to_vec(),
                q2_quadrilateral_grad(s[0], s[1]).to_vec(),
            ),
        }
    }
}

impl BulkElement for QFourierHelmholtzElement {
    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn node_id(&self, l: usize) -> usize {
        self.nodes[l]
    }

    fn face_nodes(&self, face: Face) -> Vec<usize> {
        let p = self.degree.degree();
        let n = p + 1;
        match face {
            Face::S1Min => (0..n).collect(),
            Face::S1Max => (0..n).map(|i| i + n * p).collect(),
            Face::S0Min => (0..n).map(|j| n * j).collect(),
            Face::S0Max => (0..n).map(|j| p + n * j).collect(),
        }
    }

    fn shape(&self, s: [f64; 2]) -> Vec<f64> {
        match self.degree {
            PolynomialDegree::P1 => q1_quadrilateral(s[0], s[1]).to_vec(),
            PolynomialDegree::P2 => q2_quadrilateral(s[0], s[1]).to_vec(),
        }
    }

    fn local_jacobian(&self, s: [f64; 2], nodes: &NodeStore) -> Jacobian2 {
        let (_, dpsi_ds) = self.dshape_local(s);
        let coords: Vec<[f64; 2]> = self.nodes.iter().map(|&n| nodes.position(n)).collect();
        Jacobian2::from_grads(&dpsi_ds, &coords)
    }

    fn dshape_eulerian(&self, s: [f64; 2], nodes: &NodeStore) -> EulerianShape {
        let (psi, dpsi_ds) = self.dshape_local(s);
        let coords: Vec<[f64; 2]> = self.nodes.iter().map(|&n| nodes.position(n)).collect();
        let jac = Jacobian2::from_grads(&dpsi_ds, &coords);
        let dpsi_dx = dpsi_ds.iter().map(|&g| jac.transform_gradient(g)).collect();

        EulerianShape {
            psi,
            dpsi_dx,
            det_jacobian: jac.det,
        }
    }

    fn as_fourier_helmholtz(&self) -> Option<&dyn FourierHelmholtzEquations> {
        Some(self)
    }
}

impl FourierHelmholtzEquations for QFourierHelmholtzElement {}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_q1_element() -> (QFourierHelmholtzElement, NodeStore) {
        // [1, 2] x [0, 1] on the meridian plane
        let mut nodes = NodeStore::new();
        let n0 = nodes.add_node([1.0, 0.0], 2);
        let n1 = nodes.add_node([2.0, 0.0], 2);
        let n2 = nodes.add_node([1.0, 1.0], 2);
        let n3 = nodes.add_node([2.0, 1.0], 2);
        let elem = QFourierHelmholtzElement::new(PolynomialDegree::P1, vec![n0, n1, n2, n3]);
        (elem, nodes)
    }

    #[test]
    fn test_shape_partition_of_unity() {
        let (elem, _) = unit_q1_element();
        let psi = elem.shape([0.3, -0.7]);
        let sum: f64 = psi.iter().sum();
        assert!((sum - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_dshape_eulerian_reproduces_linear_field() {
        let (elem, nodes) = unit_q1_element();

        // A field equal to the radial coordinate has gradient (1, 0)
        let shape = elem.dshape_eulerian([0.2, 0.4], &nodes);
        let mut grad = [0.0, 0.0];
        for (l, d) in shape.dpsi_dx.iter().enumerate() {
            let r = nodes.coord(elem.node_id(l), 0);
            grad[0] += r * d[0];
            grad[1] += r * d[1];
        }
        assert!((grad[0] - 1.0).abs() < 1e-13);
        assert!(grad[1].abs() < 1e-13);

        // det J = 0.25 for the [1,2] x [0,1] map
        assert!((shape.det_jacobian - 0.25).abs() < 1e-14);
    }

    #[test]
    fn test_face_nodes_ordering_q1() {
        let (elem, _) = unit_q1_element();
        assert_eq!(elem.face_nodes(Face::S1Min), vec![0, 1]);
        assert_eq!(elem.face_nodes(Face::S1Max), vec![2, 3]);
        assert_eq!(elem.face_nodes(Face::S0Min), vec![0, 2]);
        assert_eq!(elem.face_nodes(Face::S0Max), vec![1, 3]);
    }

    #[test]
    fn test_face_nodes_ordering_q2() {
        let nodes: Vec<usize> = (0..9).collect();
        let elem = QFourierHelmholtzElement::new(PolynomialDegree::P2, nodes);
        assert_eq!(elem.face_nodes(Face::S1Min), vec![0, 1, 2]);
        assert_eq!(elem.face_nodes(Face::S1Max), vec![6, 7, 8]);
        assert_eq!(elem.face_nodes(Face::S0Min), vec![0, 3, 6]);
        assert_eq!(elem.face_nodes(Face::S0Max), vec![2, 5, 8]);
    }

    #[test]
    fn test_capability_query() {
        let (elem, _) = unit_q1_element();
        let eqs = elem.as_fourier_helmholtz().expect("capability present");
        let pair = eqs.u_index_fourier_helmholtz();
        assert_eq!(pair, ComplexDofPair { re: 0, im: 1 });
    }

    #[test]
    #[should_panic]
    fn test_wrong_node_count_panics() {
        let _ = QFourierHelmholtzElement::new(PolynomialDegree::P1, vec![0, 1, 2]);
    }
}
