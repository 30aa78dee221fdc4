//! Hex8: 8-node trilinear hexahedron.
//!
//! Parametric cube `xi, eta, zeta in [-1, 1]^3`. Node ordering:
//!
//! ```text
//!        7----------6
//!       /|         /|
//!      / |        / |
//!     4----------5  |
//!     |  3-------|--2
//!     | /        | /
//!     |/         |/
//!     0----------1
//! ```
//!
//! Bottom face 0..3 at `zeta = -1`, top face 4..7 at `zeta = +1`.

use super::{ElementGeometry, IntegrationPoint};
use nalgebra::{DMatrix, DVector};

/// Parametric node coordinates, shared with [`super::Hex20`] corners.
pub(crate) const CORNERS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const GP: f64 = 0.577_350_269_189_625_8; // 1/sqrt(3)

/// 8-node hexahedron, trilinear shape functions, 2x2x2 Gauss quadrature.
#[derive(Debug, Clone, Copy)]
pub struct Hex8;

impl ElementGeometry for Hex8 {
    const NODES: usize = 8;
    const DIM: usize = 3;
    const VOIGT: usize = 6;

    fn shape_functions(xi: &[f64]) -> DVector<f64> {
        let (r, s, t) = (xi[0], xi[1], xi[2]);
        DVector::from_fn(8, |i, _| {
            let [ri, si, ti] = CORNERS[i];
            (1.0 + r * ri) * (1.0 + s * si) * (1.0 + t * ti) / 8.0
        })
    }

    fn shape_derivatives(xi: &[f64]) -> DMatrix<f64> {
        let (r, s, t) = (xi[0], xi[1], xi[2]);
        DMatrix::from_fn(8, 3, |i, a| {
            let [ri, si, ti] = CORNERS[i];
            match a {
                0 => ri * (1.0 + s * si) * (1.0 + t * ti) / 8.0,
                1 => (1.0 + r * ri) * si * (1.0 + t * ti) / 8.0,
                _ => (1.0 + r * ri) * (1.0 + s * si) * ti / 8.0,
            }
        })
    }

    fn integration_points() -> Vec<IntegrationPoint> {
        CORNERS
            .iter()
            .map(|c| IntegrationPoint {
                xi: [GP * c[0], GP * c[1], GP * c[2]],
                weight: 1.0,
            })
            .collect()
    }
}
