//! Tet4: 4-node linear (constant-strain) tetrahedron.
//!
//! Volume coordinates with `lambda = 1 - xi - eta - zeta`.
//! Nodes: 0 at (0,0,0), 1 at (1,0,0), 2 at (0,1,0), 3 at (0,0,1).

use super::{ElementGeometry, IntegrationPoint};
use nalgebra::{DMatrix, DVector};

/// 4-node tetrahedron, linear shape functions, 1-point quadrature.
#[derive(Debug, Clone, Copy)]
pub struct Tet4;

impl ElementGeometry for Tet4 {
    const NODES: usize = 4;
    const DIM: usize = 3;
    const VOIGT: usize = 6;

    fn shape_functions(xi: &[f64]) -> DVector<f64> {
        let (r, s, t) = (xi[0], xi[1], xi[2]);
        DVector::from_vec(vec![1.0 - r - s - t, r, s, t])
    }

    fn shape_derivatives(_xi: &[f64]) -> DMatrix<f64> {
        // Constant over the element.
        DMatrix::from_row_slice(4, 3, &[
            -1.0, -1.0, -1.0,
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    fn integration_points() -> Vec<IntegrationPoint> {
        vec![IntegrationPoint {
            xi: [0.25, 0.25, 0.25],
            weight: 1.0 / 6.0,
        }]
    }

    fn mass_integration_points() -> Vec<IntegrationPoint> {
        // Degree-2 rule for the quadratic mass integrand; the centroid
        // rule would leave the mass rank-1.
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn partition_of_unity() {
        let n = Tet4::shape_functions(&[0.2, 0.3, 0.1]);
        assert_relative_eq!(n.sum(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn kronecker_at_nodes() {
        let nodes = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ];
        for (i, coords) in nodes.iter().enumerate() {
            let n = Tet4::shape_functions(coords);
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(n[j], expected, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn weights_total_reference_volume() {
        let total: f64 = Tet4::integration_points().iter().map(|p| p.weight).sum();
        assert_relative_eq!(total, 1.0 / 6.0, epsilon = 1e-15);
        let mass: f64 = Tet4::mass_integration_points().iter().map(|p| p.weight).sum();
        assert_relative_eq!(mass, 1.0 / 6.0, epsilon = 1e-15);
    }
}
