//! Hex20: 20-node serendipity hexahedron.
//!
//! Corners 0..7 as in [`super::Hex8`]; mid-edge nodes 8..19:
//! 8..11 around the bottom face (edges 0-1, 1-2, 2-3, 3-0),
//! 12..15 around the top face (edges 4-5, 5-6, 6-7, 7-4),
//! 16..19 vertical (edges 0-4, 1-5, 2-6, 3-7).

use super::hex8::CORNERS;
use super::{ElementGeometry, IntegrationPoint};
use nalgebra::{DMatrix, DVector};

const EDGES: [[f64; 3]; 12] = [
    [0.0, -1.0, -1.0],
    [1.0, 0.0, -1.0],
    [0.0, 1.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, -1.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [-1.0, 0.0, 1.0],
    [-1.0, -1.0, 0.0],
    [1.0, -1.0, 0.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
];

const GP: f64 = 0.774_596_669_241_483_4; // sqrt(3/5)
const W1: f64 = 5.0 / 9.0;
const W0: f64 = 8.0 / 9.0;

/// 20-node hexahedron, serendipity shape functions, 3x3x3 Gauss quadrature.
#[derive(Debug, Clone, Copy)]
pub struct Hex20;

impl Hex20 {
    /// Parametric coordinates of node `i`.
    fn node_xi(i: usize) -> [f64; 3] {
        if i < 8 { CORNERS[i] } else { EDGES[i - 8] }
    }
}

impl ElementGeometry for Hex20 {
    const NODES: usize = 20;
    const DIM: usize = 3;
    const VOIGT: usize = 6;

    fn shape_functions(xi: &[f64]) -> DVector<f64> {
        let (r, s, t) = (xi[0], xi[1], xi[2]);
        DVector::from_fn(20, |i, _| {
            let [ri, si, ti] = Self::node_xi(i);
            if i < 8 {
                (1.0 + r * ri) * (1.0 + s * si) * (1.0 + t * ti)
                    * (r * ri + s * si + t * ti - 2.0)
                    / 8.0
            } else if ri == 0.0 {
                (1.0 - r * r) * (1.0 + s * si) * (1.0 + t * ti) / 4.0
            } else if si == 0.0 {
                (1.0 + r * ri) * (1.0 - s * s) * (1.0 + t * ti) / 4.0
            } else {
                (1.0 + r * ri) * (1.0 + s * si) * (1.0 - t * t) / 4.0
            }
        })
    }

    fn shape_derivatives(xi: &[f64]) -> DMatrix<f64> {
        let (r, s, t) = (xi[0], xi[1], xi[2]);
        DMatrix::from_fn(20, 3, |i, a| {
            let [ri, si, ti] = Self::node_xi(i);
            if i < 8 {
                match a {
                    0 => ri * (1.0 + s * si) * (1.0 + t * ti)
                        * (2.0 * r * ri + s * si + t * ti - 1.0)
                        / 8.0,
                    1 => (1.0 + r * ri) * si * (1.0 + t * ti)
                        * (r * ri + 2.0 * s * si + t * ti - 1.0)
                        / 8.0,
                    _ => (1.0 + r * ri) * (1.0 + s * si) * ti
                        * (r * ri + s * si + 2.0 * t * ti - 1.0)
                        / 8.0,
                }
            } else if ri == 0.0 {
                match a {
                    0 => -r * (1.0 + s * si) * (1.0 + t * ti) / 2.0,
                    1 => (1.0 - r * r) * si * (1.0 + t * ti) / 4.0,
                    _ => (1.0 - r * r) * (1.0 + s * si) * ti / 4.0,
                }
            } else if si == 0.0 {
                match a {
                    0 => ri * (1.0 - s * s) * (1.0 + t * ti) / 4.0,
                    1 => -s * (1.0 + r * ri) * (1.0 + t * ti) / 2.0,
                    _ => (1.0 + r * ri) * (1.0 - s * s) * ti / 4.0,
                }
            } else {
                match a {
                    0 => ri * (1.0 + s * si) * (1.0 - t * t) / 4.0,
                    1 => (1.0 + r * ri) * si * (1.0 - t * t) / 4.0,
                    _ => -t * (1.0 + r * ri) * (1.0 + s * si) / 2.0,
                }
            }
        })
    }

    fn integration_points() -> Vec<IntegrationPoint> {
        let abscissae = [(-GP, W1), (0.0, W0), (GP, W1)];
        let mut points = Vec::with_capacity(27);
        for &(t, wt) in &abscissae {
            for &(s, ws) in &abscissae {
                for &(r, wr) in &abscissae {
                    points.push(IntegrationPoint {
                        xi: [r, s, t],
                        weight: wr * ws * wt,
                    });
                }
            }
        }
        points
    }
}
