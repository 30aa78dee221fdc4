//! The constitutive callback contract.

use crate::error::Result;
use nalgebra::{Matrix2, Matrix3, Matrix6, Vector3, Vector6};

/// Constitutive response at one integration point of a 2-D element.
#[derive(Debug, Clone, PartialEq)]
pub struct Response2d {
    /// Second Piola-Kirchhoff stress tensor.
    pub stress: Matrix2<f64>,
    /// Voigt-packed stress `[s_xx, s_yy, s_xy]`.
    pub stress_voigt: Vector3<f64>,
    /// Material tangent `dS_voigt/dE_voigt` (3x3, symmetric).
    pub tangent: Matrix3<f64>,
}

/// Constitutive response at one integration point of a 3-D element.
#[derive(Debug, Clone, PartialEq)]
pub struct Response3d {
    /// Second Piola-Kirchhoff stress tensor.
    pub stress: Matrix3<f64>,
    /// Voigt-packed stress `[s_xx, s_yy, s_zz, s_xy, s_yz, s_xz]`.
    pub stress_voigt: Vector6<f64>,
    /// Material tangent `dS_voigt/dE_voigt` (6x6, symmetric).
    pub tangent: Matrix6<f64>,
}

/// A material model pluggable into the element kernels.
///
/// The kernels call the law once per integration point and impose no
/// constraint beyond the contract: the stress tensor is symmetric, the
/// tangent is symmetric and consistent with `dS_voigt/dE_voigt`. Tangent
/// consistency is not verified here; it is a caller-side testable property.
///
/// The strain argument is the tensor form of the kernel's strain measure:
/// Green-Lagrange for the finite-strain family, the symmetric displacement
/// gradient for the small-strain family. Laws that are linear in their strain
/// argument serve both families.
///
/// `Send + Sync` is part of the contract: kernels are evaluated concurrently
/// across elements and no lock is taken around the call.
pub trait ConstitutiveLaw: Send + Sync {
    /// Response for plane (2-D) elements.
    fn response_2d(&self, strain: &Matrix2<f64>) -> Result<Response2d>;

    /// Response for solid (3-D) elements.
    fn response_3d(&self, strain: &Matrix3<f64>) -> Result<Response3d>;
}
