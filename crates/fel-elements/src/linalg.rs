//! Small dense linear-algebra kernels shared by all element routines.

use crate::error::{ElementError, Result};
use nalgebra::{DMatrix, Matrix2, Matrix3};

/// Closed-form inverse and determinant of a 2x2 matrix.
///
/// Fails with [`ElementError::SingularMatrix`] when the determinant is
/// within machine epsilon of zero at the matrix's scale.
pub fn invert_2x2(a: &Matrix2<f64>) -> Result<(Matrix2<f64>, f64)> {
    let det = a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)];
    let scale = a.amax();
    if det.abs() <= f64::EPSILON * scale * scale {
        return Err(ElementError::SingularMatrix { det });
    }
    let inv = Matrix2::new(a[(1, 1)], -a[(0, 1)], -a[(1, 0)], a[(0, 0)]) / det;
    Ok((inv, det))
}

/// Closed-form cofactor-expansion inverse and determinant of a 3x3 matrix.
///
/// Fails with [`ElementError::SingularMatrix`] when the determinant is
/// within machine epsilon of zero at the matrix's scale.
pub fn invert_3x3(a: &Matrix3<f64>) -> Result<(Matrix3<f64>, f64)> {
    let c00 = a[(1, 1)] * a[(2, 2)] - a[(1, 2)] * a[(2, 1)];
    let c01 = a[(1, 2)] * a[(2, 0)] - a[(1, 0)] * a[(2, 2)];
    let c02 = a[(1, 0)] * a[(2, 1)] - a[(1, 1)] * a[(2, 0)];
    let det = a[(0, 0)] * c00 + a[(0, 1)] * c01 + a[(0, 2)] * c02;

    let scale = a.amax();
    if det.abs() <= f64::EPSILON * scale * scale * scale {
        return Err(ElementError::SingularMatrix { det });
    }

    let inv = Matrix3::new(
        c00,
        a[(0, 2)] * a[(2, 1)] - a[(0, 1)] * a[(2, 2)],
        a[(0, 1)] * a[(1, 2)] - a[(0, 2)] * a[(1, 1)],
        c01,
        a[(0, 0)] * a[(2, 2)] - a[(0, 2)] * a[(2, 0)],
        a[(0, 2)] * a[(1, 0)] - a[(0, 0)] * a[(1, 2)],
        c02,
        a[(0, 1)] * a[(2, 0)] - a[(0, 0)] * a[(2, 1)],
        a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
    ) / det;
    Ok((inv, det))
}

/// Expand an `m x n` nodal-scalar coupling matrix into an
/// `(ndim m) x (ndim n)` block matrix, placing `a[(i, j)]` on the diagonal
/// of each `ndim x ndim` block.
///
/// Turns a scalar shape-function product matrix into a vector-DOF operator:
/// the geometric stiffness and the consistent mass are both scatter
/// expansions of scalar node-coupling matrices.
pub fn scatter(a: &DMatrix<f64>, ndim: usize) -> DMatrix<f64> {
    let (m, n) = a.shape();
    let mut b = DMatrix::zeros(ndim * m, ndim * n);
    for i in 0..m {
        for j in 0..n {
            for k in 0..ndim {
                b[(ndim * i + k, ndim * j + k)] = a[(i, j)];
            }
        }
    }
    b
}
