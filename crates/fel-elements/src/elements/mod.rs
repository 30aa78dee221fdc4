//! Per-topology reference geometry: shape functions, parametric derivatives
//! and quadrature rules.
//!
//! Each topology lives in its own file and carries its own shape-function
//! tests. Node orderings and parametric frames are documented per file.

use nalgebra::{DMatrix, DVector};

pub mod hex8;
pub mod hex20;
pub mod tet4;
pub mod tet10;
pub mod tri3;
pub mod tri6;

pub use hex8::Hex8;
pub use hex20::Hex20;
pub use tet4::Tet4;
pub use tet10::Tet10;
pub use tri3::Tri3;
pub use tri6::Tri6;

/// One quadrature point of a reference cell.
///
/// `xi` holds the parametric coordinates; 2-D topologies use the first two
/// entries and leave the third at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationPoint {
    pub xi: [f64; 3],
    pub weight: f64,
}

/// Reference geometry of one element topology.
///
/// The catalogue is a closed set; kernels are generic over this trait and
/// monomorphize per topology, with runtime selection confined to the
/// dispatch in [`crate::factory`].
pub trait ElementGeometry {
    /// Number of nodes `n`.
    const NODES: usize;
    /// Spatial dimension `d`.
    const DIM: usize;
    /// Independent strain components `c = d(d+1)/2`.
    const VOIGT: usize;

    /// Shape function values at a parametric point (length `n`).
    fn shape_functions(xi: &[f64]) -> DVector<f64>;

    /// Parametric shape-function derivatives at a point (`n x d`).
    fn shape_derivatives(xi: &[f64]) -> DMatrix<f64>;

    /// Quadrature rule, exact for the polynomial order of this topology's
    /// strain energy on an affine cell.
    fn integration_points() -> Vec<IntegrationPoint>;

    /// Quadrature rule for the mass integrand `N N^T`, which is twice the
    /// shape-function order. Defaults to the stiffness rule; the simplex
    /// topologies override it because their strain-energy rules are too
    /// coarse for a full-rank mass.
    fn mass_integration_points() -> Vec<IntegrationPoint> {
        Self::integration_points()
    }

    /// Degrees of freedom `n * d`.
    fn dofs() -> usize {
        Self::NODES * Self::DIM
    }
}
