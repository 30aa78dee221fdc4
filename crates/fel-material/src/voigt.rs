//! Voigt packing of symmetric tensors.
//!
//! Component ordering is `[xx, yy, zz, xy, yz, xz]` in 3-D and
//! `[xx, yy, xy]` in 2-D. Strain vectors carry engineering shear
//! (`gamma = 2 epsilon`); stress vectors carry the tensor components as-is.

use nalgebra::{Matrix2, Matrix3, Vector3, Vector6};

/// Pack a symmetric 3-D strain tensor with engineering shear.
pub fn strain_to_voigt_3d(e: &Matrix3<f64>) -> Vector6<f64> {
    Vector6::new(
        e[(0, 0)],
        e[(1, 1)],
        e[(2, 2)],
        2.0 * e[(0, 1)],
        2.0 * e[(1, 2)],
        2.0 * e[(0, 2)],
    )
}

/// Pack a symmetric 2-D strain tensor with engineering shear.
pub fn strain_to_voigt_2d(e: &Matrix2<f64>) -> Vector3<f64> {
    Vector3::new(e[(0, 0)], e[(1, 1)], 2.0 * e[(0, 1)])
}

/// Pack a symmetric 3-D stress tensor.
pub fn stress_to_voigt_3d(s: &Matrix3<f64>) -> Vector6<f64> {
    Vector6::new(s[(0, 0)], s[(1, 1)], s[(2, 2)], s[(0, 1)], s[(1, 2)], s[(0, 2)])
}

/// Pack a symmetric 2-D stress tensor.
pub fn stress_to_voigt_2d(s: &Matrix2<f64>) -> Vector3<f64> {
    Vector3::new(s[(0, 0)], s[(1, 1)], s[(0, 1)])
}

/// Rebuild the full 3-D stress tensor from its Voigt vector.
pub fn stress_from_voigt_3d(v: &Vector6<f64>) -> Matrix3<f64> {
    Matrix3::new(
        v[0], v[3], v[5],
        v[3], v[1], v[4],
        v[5], v[4], v[2],
    )
}

/// Rebuild the full 2-D stress tensor from its Voigt vector.
pub fn stress_from_voigt_2d(v: &Vector3<f64>) -> Matrix2<f64> {
    Matrix2::new(v[0], v[2], v[2], v[1])
}
