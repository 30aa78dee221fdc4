//! Consistent mass matrices.

use crate::elements::ElementGeometry;
use crate::error::{ElementError, Result};
use crate::kinematics;
use crate::linalg::scatter;
use nalgebra::{DMatrix, DVector};

/// Consistent mass matrix (`n d x n d`) from reference geometry, density
/// and (2-D) thickness.
///
/// `M = sum_i w_i det_J_i rho t? N_i N_i^T`, scatter-expanded to vector
/// DOFs. Symmetric positive definite for `rho > 0` and non-degenerate
/// geometry; independent of the displacement state.
///
/// Integrates with [`ElementGeometry::mass_integration_points`]: the
/// `N N^T` integrand is twice the shape-function order, so the stiffness
/// rules of the simplex topologies are too coarse here.
pub fn consistent_mass<G: ElementGeometry>(
    x_ref: &DVector<f64>,
    density: f64,
    thickness: f64,
) -> Result<DMatrix<f64>> {
    if x_ref.len() != G::dofs() {
        return Err(ElementError::ShapeMismatch {
            what: "reference coordinates",
            expected: G::dofs(),
            found: x_ref.len(),
        });
    }

    let coords = DMatrix::from_fn(G::NODES, G::DIM, |i, a| x_ref[G::DIM * i + a]);
    let scale = if G::DIM == 2 { thickness } else { 1.0 };
    let mut coupling = DMatrix::zeros(G::NODES, G::NODES);

    for (index, ip) in G::mass_integration_points().iter().enumerate() {
        let grad_ref = G::shape_derivatives(&ip.xi);
        let point = kinematics::reference_gradients(&coords, &grad_ref, index)?;
        let n = G::shape_functions(&ip.xi);
        coupling += (&n * n.transpose()) * (ip.weight * point.det_j * density * scale);
    }

    Ok(scatter(&coupling, G::DIM))
}
