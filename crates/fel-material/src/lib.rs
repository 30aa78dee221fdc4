//! Constitutive layer for the element kernel library.
//!
//! The element kernels are agnostic to the material model: per integration
//! point they hand a strain tensor to a [`ConstitutiveLaw`] and receive the
//! second Piola-Kirchhoff stress (full tensor and Voigt vector) together with
//! the consistent material tangent. This crate defines that contract, the
//! Voigt packing conventions shared with the kernels, and the reference
//! St. Venant-Kirchhoff implementation used by the test harness.

pub mod error;
pub mod law;
pub mod material;
pub mod voigt;

pub use error::{MaterialError, Result};
pub use law::{ConstitutiveLaw, Response2d, Response3d};
pub use material::{KirchhoffMaterial, Plane2d};
