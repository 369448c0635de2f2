//! Face elements: 1D boundary elements on the faces of meridian-plane
//! bulk elements
//!
//! A face element is a weak view into a subset of the bulk element's nodes
//! (those lying on one face). It carries its own quadrature rule and shape
//! functions, and supplies the geometric bridge back into the bulk element:
//! the boundary-to-bulk local-coordinate embedding and the outward unit
//! normal.

use serde::{Deserialize, Serialize};

use crate::basis::{q1_line, q1_line_grad, q2_line, q2_line_grad};
use crate::element::bulk::BulkElement;
use crate::mesh::NodeStore;
use crate::quadrature::{QuadraturePoint, QuadratureRule, ReferenceDomain};

/// One face of the reference quadrilateral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    /// xi = -1 (boundary coordinate runs along eta)
    S0Min,
    /// xi = +1
    S0Max,
    /// eta = -1 (boundary coordinate runs along xi)
    S1Min,
    /// eta = +1
    S1Max,
}

impl Face {
    /// Embed a boundary-local coordinate into the bulk element's local frame
    pub fn bulk_coordinate(&self, s: f64) -> [f64; 2] {
        match self {
            Face::S0Min => [-1.0, s],
            Face::S0Max => [1.0, s],
            Face::S1Min => [s, -1.0],
            Face::S1Max => [s, 1.0],
        }
    }

    /// Index of the bulk-local coordinate held fixed on this face
    pub fn fixed_axis(&self) -> usize {
        match self {
            Face::S0Min | Face::S0Max => 0,
            Face::S1Min | Face::S1Max => 1,
        }
    }

    /// +1 on a max face, -1 on a min face; orients the outward normal
    pub fn outward_sign(&self) -> f64 {
        match self {
            Face::S0Max | Face::S1Max => 1.0,
            Face::S0Min | Face::S1Min => -1.0,
        }
    }
}

/// Geometric interface a face element offers the boundary assemblers
///
/// Boundary-local coordinates are passed as slices so that the assembly
/// routines are written once, independent of the face dimension; this
/// element family only instantiates dimension 1.
pub trait FaceGeometry {
    /// Dimension of the boundary-local coordinate
    fn boundary_dim(&self) -> usize;

    /// Number of nodes on the face
    fn num_nodes(&self) -> usize;

    /// Global node id of local face node `l`
    fn node_id(&self, l: usize) -> usize;

    /// Points of the face's own quadrature rule
    fn quadrature_points(&self) -> &[QuadraturePoint];

    /// Shape functions at a boundary-local coordinate. Test functions are
    /// the same functions (Galerkin choice).
    fn shape(&self, s: &[f64]) -> Vec<f64>;

    /// Jacobian of the boundary-local to global map
    fn j_eulerian(&self, s: &[f64], nodes: &NodeStore) -> f64;

    /// Interpolated global (r, z) position
    fn interpolated_position(&self, s: &[f64], nodes: &NodeStore) -> [f64; 2];

    /// Local coordinate inside the bulk element corresponding to `s`
    fn local_coordinate_in_bulk(&self, s: &[f64]) -> [f64; 2];

    /// Outward unit normal of the bulk element at `s`
    ///
    /// Degenerate geometry yields non-finite components (and a warning),
    /// never a silently patched value.
    fn outer_unit_normal(&self, s: &[f64], nodes: &NodeStore) -> [f64; 2];
}

/// A 1D face element viewing the nodes of one face of a 2D bulk element
///
/// Holds a borrow of the bulk element: the bulk element and its nodes
/// outlive the face element, which owns nothing but its node-id list and
/// quadrature rule.
#[derive(Debug)]
pub struct LineFaceElement<'a, E: BulkElement> {
    bulk: &'a E,
    face: Face,
    /// Global ids of the face nodes, ordered along the face coordinate
    nodes: Vec<usize>,
    quadrature: QuadratureRule,
}

impl<'a, E: BulkElement> LineFaceElement<'a, E> {
    /// Build the face element for one face of `bulk`
    ///
    /// The default quadrature order equals the number of face nodes, which
    /// integrates the shape-function products of this family exactly on
    /// affine edges.
    pub fn new(bulk: &'a E, face: Face) -> Self {
        let local = bulk.face_nodes(face);
        let nodes: Vec<usize> = local.iter().map(|&l| bulk.node_id(l)).collect();
        let order = nodes.len();

        Self {
            bulk,
            face,
            nodes,
            quadrature: QuadratureRule::new(ReferenceDomain::Line, order),
        }
    }

    /// Replace the integration rule, e.g. to over-integrate a curved or
    /// strongly varying integrand
    pub fn set_quadrature_order(&mut self, order: usize) {
        self.quadrature = QuadratureRule::new(ReferenceDomain::Line, order);
    }

    /// The bulk element this face is attached to
    pub fn bulk(&self) -> &E {
        self.bulk
    }

    /// The attached face
    pub fn face(&self) -> Face {
        self.face
    }

    fn shape_1d(&self, s: f64) -> Vec<f64> {
        match self.nodes.len() {
            2 => q1_line(s).to_vec(),
            3 => q2_line(s).to_vec(),
            n => panic!("face elements support 2 or 3 nodes, got {}", n),
        }
    }

    fn dshape_1d(&self, s: f64) -> Vec<f64> {
        match self.nodes.len() {
            2 => q1_line_grad().to_vec(),
            3 => q2_line_grad(s).to_vec(),
            n => panic!("face elements support 2 or 3 nodes, got {}", n),
        }
    }
}

impl<'a, E: BulkElement> FaceGeometry for LineFaceElement<'a, E> {
    fn boundary_dim(&self) -> usize {
        1
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn node_id(&self, l: usize) -> usize {
        self.nodes[l]
    }

    fn quadrature_points(&self) -> &[QuadraturePoint] {
        &self.quadrature.points
    }

    fn shape(&self, s: &[f64]) -> Vec<f64> {
        self.shape_1d(s[0])
    }

    fn j_eulerian(&self, s: &[f64], nodes: &NodeStore) -> f64 {
        let dpsi = self.dshape_1d(s[0]);
        let mut tangent = [0.0; 2];
        for (l, &d) in dpsi.iter().enumerate() {
            let x = nodes.position(self.nodes[l]);
            tangent[0] += d * x[0];
            tangent[1] += d * x[1];
        }
        (tangent[0] * tangent[0] + tangent[1] * tangent[1]).sqrt()
    }

    fn interpolated_position(&self, s: &[f64], nodes: &NodeStore) -> [f64; 2] {
        let psi = self.shape_1d(s[0]);
        let mut x = [0.0; 2];
        for (l, &p) in psi.iter().enumerate() {
            let pos = nodes.position(self.nodes[l]);
            x[0] += p * pos[0];
            x[1] += p * pos[1];
        }
        x
    }

    fn local_coordinate_in_bulk(&self, s: &[f64]) -> [f64; 2] {
        self.face.bulk_coordinate(s[0])
    }

    fn outer_unit_normal(&self, s: &[f64], nodes: &NodeStore) -> [f64; 2] {
        let s_bulk = self.face.bulk_coordinate(s[0]);
        let jac = self.bulk.local_jacobian(s_bulk, nodes);

        // The outward normal is along the global-coordinate gradient of the
        // fixed local coordinate, oriented by the face sign.
        let axis = self.face.fixed_axis();
        let sign = self.face.outward_sign();
        let g = jac.inverse[axis];
        let norm = (g[0] * g[0] + g[1] * g[1]).sqrt();

        if norm <= 0.0 || !norm.is_finite() {
            log::warn!(
                "degenerate face geometry: cannot normalise outward normal (|grad s| = {})",
                norm
            );
        }

        [sign * g[0] / norm, sign * g[1] / norm]
    }
}
