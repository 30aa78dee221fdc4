//! Tri3: 3-node linear (constant-strain) triangle.
//!
//! Parametric frame: area coordinates with `lambda = 1 - xi - eta`.
//! Nodes: 0 at (0,0), 1 at (1,0), 2 at (0,1), counter-clockwise for a
//! positive Jacobian.

use super::{ElementGeometry, IntegrationPoint};
use nalgebra::{DMatrix, DVector};

/// 3-node triangle, linear shape functions, 1-point quadrature.
#[derive(Debug, Clone, Copy)]
pub struct Tri3;

impl ElementGeometry for Tri3 {
    const NODES: usize = 3;
    const DIM: usize = 2;
    const VOIGT: usize = 3;

    fn shape_functions(xi: &[f64]) -> DVector<f64> {
        let (r, s) = (xi[0], xi[1]);
        DVector::from_vec(vec![1.0 - r - s, r, s])
    }

    fn shape_derivatives(_xi: &[f64]) -> DMatrix<f64> {
        // Constant over the element.
        DMatrix::from_row_slice(3, 2, &[
            -1.0, -1.0,
            1.0, 0.0,
            0.0, 1.0,
        ])
    }

    fn integration_points() -> Vec<IntegrationPoint> {
        vec![IntegrationPoint {
            xi: [1.0 / 3.0, 1.0 / 3.0, 0.0],
            weight: 0.5,
        }]
    }

    fn mass_integration_points() -> Vec<IntegrationPoint> {
        // Degree-2 rule for the quadratic mass integrand; the 1-point
        // stiffness rule would leave the mass rank-1.
        let w = 1.0 / 6.0;
        vec![
            IntegrationPoint { xi: [1.0 / 6.0, 1.0 / 6.0, 0.0], weight: w },
            IntegrationPoint { xi: [2.0 / 3.0, 1.0 / 6.0, 0.0], weight: w },
            IntegrationPoint { xi: [1.0 / 6.0, 2.0 / 3.0, 0.0], weight: w },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn partition_of_unity() {
        let n = Tri3::shape_functions(&[0.3, 0.25]);
        assert_relative_eq!(n.sum(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn kronecker_at_nodes() {
        let nodes = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        for (i, coords) in nodes.iter().enumerate() {
            let n = Tri3::shape_functions(coords);
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(n[j], expected, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn derivative_columns_sum_to_zero() {
        let d = Tri3::shape_derivatives(&[0.2, 0.2]);
        assert_relative_eq!(d.column(0).sum(), 0.0, epsilon = 1e-14);
        assert_relative_eq!(d.column(1).sum(), 0.0, epsilon = 1e-14);
    }

    #[test]
    fn weights_total_reference_area() {
        let total: f64 = Tri3::integration_points().iter().map(|p| p.weight).sum();
        assert_relative_eq!(total, 0.5, epsilon = 1e-15);
        let mass: f64 = Tri3::mass_integration_points().iter().map(|p| p.weight).sum();
        assert_relative_eq!(mass, 0.5, epsilon = 1e-15);
    }
}
