//! Error types for the constitutive layer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MaterialError>;

/// Errors reported by constitutive laws.
///
/// The element kernels propagate these unchanged; recovery (step-size
/// reduction, load bisection) belongs to the outer solution driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// Physically invalid material parameters.
    #[error("invalid material parameter: {0}")]
    InvalidParameter(String),

    /// The strain handed to the law is outside its admissible domain.
    #[error("strain outside admissible domain: {0}")]
    InvalidStrain(String),

    /// An internal return-mapping or iteration failed to converge.
    #[error("constitutive update did not converge: {0}")]
    NonConvergence(String),
}
