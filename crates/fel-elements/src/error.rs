//! Error types for element kernel evaluation.

use fel_material::MaterialError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ElementError>;

/// Failures surfaced by an element kernel evaluation.
///
/// None of these are retried at this layer. A degenerate element or a failed
/// constitutive update aborts the evaluation of that element only; the outer
/// nonlinear driver decides whether to bisect the load step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElementError {
    /// Non-positive Jacobian determinant at an integration point: the
    /// element is collapsed or its nodes are inverted.
    #[error("degenerate geometry: Jacobian determinant {det:.6e} at integration point {point}")]
    DegenerateGeometry { point: usize, det: f64 },

    /// A closed-form matrix inverse hit a determinant below machine
    /// precision at the matrix's scale.
    #[error("singular matrix: determinant {det:.6e} below machine precision")]
    SingularMatrix { det: f64 },

    /// The SVD behind the gauss-to-node extrapolation did not yield a
    /// pseudo-inverse of the shape-value matrix.
    #[error("nodal extrapolation failed: no pseudo-inverse at tolerance {tolerance:.1e}")]
    ExtrapolationFailed { tolerance: f64 },

    /// The caller supplied a vector of the wrong length for the topology.
    /// Checked before any arithmetic.
    #[error("shape mismatch: {what} needs {expected} components, got {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// The constitutive callback failed; propagated unchanged.
    #[error("constitutive law failed: {0}")]
    Constitutive(#[from] MaterialError),
}
