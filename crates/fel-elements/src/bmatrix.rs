//! Strain-displacement operator builders.
//!
//! `B` maps nodal displacement increments to Voigt strain increments,
//! `delta E_voigt = B * delta u`, with columns ordered node-major
//! `[u0x, u0y, (u0z), u1x, ...]`. Voigt rows follow the crate convention
//! (2-D `[xx, yy, xy]`, 3-D `[xx, yy, zz, xy, yz, xz]`, engineering shear).

use nalgebra::DMatrix;

/// Classical small-strain operator (`c x n d`), independent of the
/// deformation state.
pub fn linear_b(grad_phys: &DMatrix<f64>) -> DMatrix<f64> {
    let (n, d) = grad_phys.shape();
    match d {
        2 => {
            let mut b = DMatrix::zeros(3, 2 * n);
            for i in 0..n {
                let col = 2 * i;
                let (gx, gy) = (grad_phys[(i, 0)], grad_phys[(i, 1)]);
                b[(0, col)] = gx;
                b[(1, col + 1)] = gy;
                b[(2, col)] = gy;
                b[(2, col + 1)] = gx;
            }
            b
        }
        3 => {
            let mut b = DMatrix::zeros(6, 3 * n);
            for i in 0..n {
                let col = 3 * i;
                let (gx, gy, gz) = (grad_phys[(i, 0)], grad_phys[(i, 1)], grad_phys[(i, 2)]);
                b[(0, col)] = gx;
                b[(1, col + 1)] = gy;
                b[(2, col + 2)] = gz;
                b[(3, col)] = gy;
                b[(3, col + 1)] = gx;
                b[(4, col + 1)] = gz;
                b[(4, col + 2)] = gy;
                b[(5, col)] = gz;
                b[(5, col + 2)] = gx;
            }
            b
        }
        _ => unreachable!("element dimension is 2 or 3"),
    }
}

/// Total-Lagrangian operator for the Green-Lagrange strain (`c x n d`),
/// linear in the deformation gradient `f`.
///
/// Column `(i, k)` holds `d E_voigt / d u_{ik}` evaluated at the current
/// state; at `f = I` this reduces exactly to [`linear_b`].
pub fn lagrangian_b(grad_phys: &DMatrix<f64>, f: &DMatrix<f64>) -> DMatrix<f64> {
    let (n, d) = grad_phys.shape();
    match d {
        2 => {
            let mut b = DMatrix::zeros(3, 2 * n);
            for i in 0..n {
                let (gx, gy) = (grad_phys[(i, 0)], grad_phys[(i, 1)]);
                for k in 0..2 {
                    let col = 2 * i + k;
                    b[(0, col)] = f[(k, 0)] * gx;
                    b[(1, col)] = f[(k, 1)] * gy;
                    b[(2, col)] = f[(k, 0)] * gy + f[(k, 1)] * gx;
                }
            }
            b
        }
        3 => {
            let mut b = DMatrix::zeros(6, 3 * n);
            for i in 0..n {
                let (gx, gy, gz) = (grad_phys[(i, 0)], grad_phys[(i, 1)], grad_phys[(i, 2)]);
                for k in 0..3 {
                    let col = 3 * i + k;
                    b[(0, col)] = f[(k, 0)] * gx;
                    b[(1, col)] = f[(k, 1)] * gy;
                    b[(2, col)] = f[(k, 2)] * gz;
                    b[(3, col)] = f[(k, 0)] * gy + f[(k, 1)] * gx;
                    b[(4, col)] = f[(k, 1)] * gz + f[(k, 2)] * gy;
                    b[(5, col)] = f[(k, 0)] * gz + f[(k, 2)] * gx;
                }
            }
            b
        }
        _ => unreachable!("element dimension is 2 or 3"),
    }
}
