//! Tri6: 6-node quadratic triangle.
//!
//! Corners 0..2 as in [`super::Tri3`]; mid-side nodes 3 on edge 0-1,
//! 4 on edge 1-2, 5 on edge 2-0.

use super::{ElementGeometry, IntegrationPoint};
use nalgebra::{DMatrix, DVector};

/// 6-node triangle, quadratic shape functions, 3-point quadrature.
#[derive(Debug, Clone, Copy)]
pub struct Tri6;

impl ElementGeometry for Tri6 {
    const NODES: usize = 6;
    const DIM: usize = 2;
    const VOIGT: usize = 3;

    fn shape_functions(xi: &[f64]) -> DVector<f64> {
        let (r, s) = (xi[0], xi[1]);
        let l = 1.0 - r - s;
        DVector::from_vec(vec![
            l * (2.0 * l - 1.0),
            r * (2.0 * r - 1.0),
            s * (2.0 * s - 1.0),
            4.0 * l * r,
            4.0 * r * s,
            4.0 * s * l,
        ])
    }

    fn shape_derivatives(xi: &[f64]) -> DMatrix<f64> {
        let (r, s) = (xi[0], xi[1]);
        let l = 1.0 - r - s;
        DMatrix::from_row_slice(6, 2, &[
            1.0 - 4.0 * l, 1.0 - 4.0 * l,
            4.0 * r - 1.0, 0.0,
            0.0, 4.0 * s - 1.0,
            4.0 * (l - r), -4.0 * r,
            4.0 * s, 4.0 * r,
            -4.0 * s, 4.0 * (l - s),
        ])
    }

    fn integration_points() -> Vec<IntegrationPoint> {
        // Degree-2 rule, exact for the quadratic element's strain energy on
        // an affine triangle.
        let w = 1.0 / 6.0;
        vec![
            IntegrationPoint { xi: [1.0 / 6.0, 1.0 / 6.0, 0.0], weight: w },
            IntegrationPoint { xi: [2.0 / 3.0, 1.0 / 6.0, 0.0], weight: w },
            IntegrationPoint { xi: [1.0 / 6.0, 2.0 / 3.0, 0.0], weight: w },
        ]
    }

    fn mass_integration_points() -> Vec<IntegrationPoint> {
        // Degree-4 6-point rule for the quartic mass integrand.
        let a = 0.445_948_490_915_965;
        let wa = 0.223_381_589_678_011 / 2.0;
        let b = 0.091_576_213_509_771;
        let wb = 0.109_951_743_655_322 / 2.0;
        vec![
            IntegrationPoint { xi: [a, a, 0.0], weight: wa },
            IntegrationPoint { xi: [1.0 - 2.0 * a, a, 0.0], weight: wa },
            IntegrationPoint { xi: [a, 1.0 - 2.0 * a, 0.0], weight: wa },
            IntegrationPoint { xi: [b, b, 0.0], weight: wb },
            IntegrationPoint { xi: [1.0 - 2.0 * b, b, 0.0], weight: wb },
            IntegrationPoint { xi: [b, 1.0 - 2.0 * b, 0.0], weight: wb },
        ]
    }
}
