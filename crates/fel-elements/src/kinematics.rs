//! Per-integration-point kinematics: Jacobian mapping, displacement
//! gradient, deformation gradient and strain measures.
//!
//! Nodal tables are stored `n x d` (one row per node). Gradients with
//! respect to reference coordinates come out of the Jacobian inverse; the
//! determinant must be strictly positive or the element is degenerate.

use crate::error::{ElementError, Result};
use crate::linalg::{invert_2x2, invert_3x3};
use nalgebra::{DMatrix, Matrix2, Matrix3};

/// Reference-frame derivatives at one integration point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGradients {
    /// Shape-function derivatives with respect to reference coordinates
    /// (`n x d`).
    pub grad_phys: DMatrix<f64>,
    /// Jacobian determinant (local volume/area scaling), strictly positive.
    pub det_j: f64,
}

/// Map parametric shape-function derivatives to reference-physical ones.
///
/// `coords` is the `n x d` reference node table, `grad_ref` the `n x d`
/// parametric derivative table. `point` only labels the error on failure.
pub fn reference_gradients(
    coords: &DMatrix<f64>,
    grad_ref: &DMatrix<f64>,
    point: usize,
) -> Result<PointGradients> {
    let (n, d) = grad_ref.shape();
    debug_assert_eq!(coords.shape(), (n, d));

    // J[(a, b)] = d X_a / d xi_b
    match d {
        2 => {
            let j = Matrix2::from_fn(|a, b| {
                (0..n).map(|i| coords[(i, a)] * grad_ref[(i, b)]).sum()
            });
            let det = j[(0, 0)] * j[(1, 1)] - j[(0, 1)] * j[(1, 0)];
            if det <= 0.0 {
                return Err(ElementError::DegenerateGeometry { point, det });
            }
            let (j_inv, _) = invert_2x2(&j)?;
            let grad_phys = DMatrix::from_fn(n, d, |i, a| {
                (0..d).map(|b| grad_ref[(i, b)] * j_inv[(b, a)]).sum()
            });
            Ok(PointGradients { grad_phys, det_j: det })
        }
        3 => {
            let j = Matrix3::from_fn(|a, b| {
                (0..n).map(|i| coords[(i, a)] * grad_ref[(i, b)]).sum()
            });
            let det = j.determinant();
            if det <= 0.0 {
                return Err(ElementError::DegenerateGeometry { point, det });
            }
            let (j_inv, _) = invert_3x3(&j)?;
            let grad_phys = DMatrix::from_fn(n, d, |i, a| {
                (0..d).map(|b| grad_ref[(i, b)] * j_inv[(b, a)]).sum()
            });
            Ok(PointGradients { grad_phys, det_j: det })
        }
        _ => unreachable!("element dimension is 2 or 3"),
    }
}

/// Displacement gradient `H = d u / d X` (`d x d`) from the `n x d` nodal
/// displacement table and the physical shape-function derivatives.
pub fn displacement_gradient(disp: &DMatrix<f64>, grad_phys: &DMatrix<f64>) -> DMatrix<f64> {
    let (n, d) = grad_phys.shape();
    DMatrix::from_fn(d, d, |a, b| {
        (0..n).map(|i| disp[(i, a)] * grad_phys[(i, b)]).sum()
    })
}

/// Deformation gradient `F = I + H`.
pub fn deformation_gradient(h: &DMatrix<f64>) -> DMatrix<f64> {
    let d = h.nrows();
    DMatrix::identity(d, d) + h
}

/// Green-Lagrange strain `E = (F^T F - I) / 2`, objective under rigid
/// rotation of the current configuration.
pub fn green_lagrange(f: &DMatrix<f64>) -> DMatrix<f64> {
    let d = f.nrows();
    (f.transpose() * f - DMatrix::identity(d, d)) * 0.5
}

/// Small strain `eps = (H + H^T) / 2`; the small-strain family never forms
/// the deformation gradient.
pub fn small_strain(h: &DMatrix<f64>) -> DMatrix<f64> {
    (h + h.transpose()) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementGeometry, Tet4, Tri3};
    use approx::assert_relative_eq;

    #[test]
    fn unit_triangle_has_identity_mapping() {
        let coords = DMatrix::from_row_slice(3, 2, &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        let grad_ref = Tri3::shape_derivatives(&[1.0 / 3.0, 1.0 / 3.0]);
        let g = reference_gradients(&coords, &grad_ref, 0).unwrap();
        assert_relative_eq!(g.det_j, 1.0, epsilon = 1e-14);
        // On the reference cell, physical and parametric derivatives agree.
        for i in 0..3 {
            for a in 0..2 {
                assert_relative_eq!(g.grad_phys[(i, a)], grad_ref[(i, a)], epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn inverted_triangle_is_degenerate() {
        // Nodes 1 and 2 swapped: negative signed area.
        let coords = DMatrix::from_row_slice(3, 2, &[0.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
        let grad_ref = Tri3::shape_derivatives(&[1.0 / 3.0, 1.0 / 3.0]);
        assert!(matches!(
            reference_gradients(&coords, &grad_ref, 0),
            Err(ElementError::DegenerateGeometry { det, .. }) if det < 0.0
        ));
    }

    #[test]
    fn scaled_tet_jacobian() {
        // Tet scaled by 2 in x: det_J doubles.
        let coords = DMatrix::from_row_slice(4, 3, &[
            0.0, 0.0, 0.0,
            2.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ]);
        let grad_ref = Tet4::shape_derivatives(&[0.25, 0.25, 0.25]);
        let g = reference_gradients(&coords, &grad_ref, 0).unwrap();
        assert_relative_eq!(g.det_j, 2.0, epsilon = 1e-14);
    }

    #[test]
    fn green_lagrange_vanishes_for_rigid_rotation() {
        let (c, s) = (0.3_f64.cos(), 0.3_f64.sin());
        let f = DMatrix::from_row_slice(2, 2, &[c, -s, s, c]);
        let e = green_lagrange(&f);
        for v in e.iter() {
            assert_relative_eq!(*v, 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn uniaxial_stretch_strain() {
        let lam = 1.1;
        let mut f = DMatrix::identity(3, 3);
        f[(0, 0)] = lam;
        let e = green_lagrange(&f);
        assert_relative_eq!(e[(0, 0)], (lam * lam - 1.0) / 2.0, epsilon = 1e-14);
        assert_relative_eq!(e[(1, 1)], 0.0, epsilon = 1e-15);
    }
}
