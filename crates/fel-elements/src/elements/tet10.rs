//! Tet10: 10-node quadratic tetrahedron.
//!
//! Corners 0..3 as in [`super::Tet4`]; mid-edge nodes:
//! 4 on edge 0-1, 5 on edge 1-2, 6 on edge 0-2,
//! 7 on edge 0-3, 8 on edge 1-3, 9 on edge 2-3.

use super::{ElementGeometry, IntegrationPoint};
use nalgebra::{DMatrix, DVector};

/// 10-node tetrahedron, quadratic shape functions, 4-point quadrature.
#[derive(Debug, Clone, Copy)]
pub struct Tet10;

impl ElementGeometry for Tet10 {
    const NODES: usize = 10;
    const DIM: usize = 3;
    const VOIGT: usize = 6;

    fn shape_functions(xi: &[f64]) -> DVector<f64> {
        let (r, s, t) = (xi[0], xi[1], xi[2]);
        let l = 1.0 - r - s - t;
        DVector::from_vec(vec![
            l * (2.0 * l - 1.0),
            r * (2.0 * r - 1.0),
            s * (2.0 * s - 1.0),
            t * (2.0 * t - 1.0),
            4.0 * l * r,
            4.0 * r * s,
            4.0 * s * l,
            4.0 * l * t,
            4.0 * r * t,
            4.0 * s * t,
        ])
    }

    fn shape_derivatives(xi: &[f64]) -> DMatrix<f64> {
        let (r, s, t) = (xi[0], xi[1], xi[2]);
        let l = 1.0 - r - s - t;
        let dl = 1.0 - 4.0 * l;
        DMatrix::from_row_slice(10, 3, &[
            dl, dl, dl,
            4.0 * r - 1.0, 0.0, 0.0,
            0.0, 4.0 * s - 1.0, 0.0,
            0.0, 0.0, 4.0 * t - 1.0,
            4.0 * (l - r), -4.0 * r, -4.0 * r,
            4.0 * s, 4.0 * r, 0.0,
            -4.0 * s, 4.0 * (l - s), -4.0 * s,
            -4.0 * t, -4.0 * t, 4.0 * (l - t),
            4.0 * t, 0.0, 4.0 * r,
            0.0, 4.0 * t, 4.0 * s,
        ])
    }

    fn integration_points() -> Vec<IntegrationPoint> {
        // Classic 4-point degree-2 rule; weights sum to the unit-tet
        // volume 1/6.
        let a = 0.585_410_196_624_968_5;
        let b = 0.138_196_601_125_010_5;
        let w = 1.0 / 24.0;
        vec![
            IntegrationPoint { xi: [a, b, b], weight: w },
            IntegrationPoint { xi: [b, a, b], weight: w },
            IntegrationPoint { xi: [b, b, a], weight: w },
            IntegrationPoint { xi: [b, b, b], weight: w },
        ]
    }

    fn mass_integration_points() -> Vec<IntegrationPoint> {
        // Keast degree-4 11-point rule for the quartic mass integrand.
        // Weights carry the unit-tet volume 1/6; the centroid weight is
        // negative, which is fine because the rule is exact at this degree.
        let a = 11.0 / 14.0;
        let b = 1.0 / 14.0;
        let wc = -74.0 / 5625.0;
        let wa = 343.0 / 45_000.0;
        let c = 0.399_403_576_166_799_2;
        let d = 0.100_596_423_833_200_8;
        let wd = 56.0 / 2250.0;
        vec![
            IntegrationPoint { xi: [0.25, 0.25, 0.25], weight: wc },
            IntegrationPoint { xi: [b, b, b], weight: wa },
            IntegrationPoint { xi: [a, b, b], weight: wa },
            IntegrationPoint { xi: [b, a, b], weight: wa },
            IntegrationPoint { xi: [b, b, a], weight: wa },
            IntegrationPoint { xi: [c, c, d], weight: wd },
            IntegrationPoint { xi: [c, d, c], weight: wd },
            IntegrationPoint { xi: [d, c, c], weight: wd },
            IntegrationPoint { xi: [c, d, d], weight: wd },
            IntegrationPoint { xi: [d, c, d], weight: wd },
            IntegrationPoint { xi: [d, d, c], weight: wd },
        ]
    }
}
