//! Element stiffness/force kernels.
//!
//! Two explicit kernel families share the geometry and kinematics layers:
//!
//! * [`SmallStrainKernel`] - linearized kinematics. The strain measure is
//!   the symmetric displacement gradient, the strain-displacement operator
//!   is the classical one and there is no geometric stiffness.
//! * [`FiniteStrainKernel`] - total-Lagrangian kinematics. Green-Lagrange
//!   strain, deformation-gradient-weighted operator, geometric (initial
//!   stress) stiffness, and per-integration-point stress/strain export.
//!
//! Each evaluation is a pure function of its inputs: the kernels hold no
//! state besides the 2-D thickness, so they are freely shared across
//! threads.

use crate::bmatrix::{lagrangian_b, linear_b};
use crate::elements::ElementGeometry;
use crate::error::{ElementError, Result};
use crate::kinematics;
use crate::linalg::scatter;
use fel_material::ConstitutiveLaw;
use nalgebra::{DMatrix, DVector, Matrix2, Matrix3};
use std::marker::PhantomData;

/// Singular-value cutoff for the gauss-to-node extrapolation fit.
const EXTRAPOLATION_SVD_EPS: f64 = 1e-12;

/// Finite-strain kernel results: tangent stiffness, internal force, and
/// Voigt stress/strain tables with one row per integration point.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelOutput {
    pub stiffness: DMatrix<f64>,
    pub internal_force: DVector<f64>,
    pub gauss_stress: DMatrix<f64>,
    pub gauss_strain: DMatrix<f64>,
}

/// Small-strain element kernel for topology `G`.
#[derive(Debug, Clone, Copy)]
pub struct SmallStrainKernel<G: ElementGeometry> {
    thickness: f64,
    _topology: PhantomData<G>,
}

/// Finite-strain element kernel for topology `G`.
#[derive(Debug, Clone, Copy)]
pub struct FiniteStrainKernel<G: ElementGeometry> {
    thickness: f64,
    _topology: PhantomData<G>,
}

impl<G: ElementGeometry> Default for SmallStrainKernel<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: ElementGeometry> Default for FiniteStrainKernel<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: ElementGeometry> SmallStrainKernel<G> {
    pub fn new() -> Self {
        Self { thickness: 1.0, _topology: PhantomData }
    }

    /// Uniform thickness multiplying every integration weight; meaningful
    /// for the 2-D topologies only.
    pub fn with_thickness(thickness: f64) -> Self {
        Self { thickness, _topology: PhantomData }
    }

    /// Tangent stiffness and internal force at the given displacement state.
    pub fn stiffness_and_force<M: ConstitutiveLaw + ?Sized>(
        &self,
        x_ref: &DVector<f64>,
        u: &DVector<f64>,
        law: &M,
    ) -> Result<(DMatrix<f64>, DVector<f64>)> {
        check_len::<G>("reference coordinates", x_ref)?;
        check_len::<G>("displacements", u)?;

        let coords = node_table::<G>(x_ref);
        let disp = node_table::<G>(u);
        let ndof = G::dofs();
        let mut stiffness = DMatrix::zeros(ndof, ndof);
        let mut force = DVector::zeros(ndof);
        let scale = plane_scale::<G>(self.thickness);

        for (index, ip) in G::integration_points().iter().enumerate() {
            let grad_ref = G::shape_derivatives(&ip.xi);
            let point = kinematics::reference_gradients(&coords, &grad_ref, index)?;
            let h = kinematics::displacement_gradient(&disp, &point.grad_phys);
            let strain = kinematics::small_strain(&h);

            let (_, stress_voigt, tangent) = material_response::<G, M>(law, &strain)?;
            let b = linear_b(&point.grad_phys);
            let w = ip.weight * point.det_j * scale;

            force += (b.transpose() * &stress_voigt) * w;
            stiffness += (b.transpose() * &tangent * &b) * w;
        }
        Ok((stiffness, force))
    }
}

impl<G: ElementGeometry> FiniteStrainKernel<G> {
    pub fn new() -> Self {
        Self { thickness: 1.0, _topology: PhantomData }
    }

    /// Uniform thickness multiplying every integration weight; meaningful
    /// for the 2-D topologies only.
    pub fn with_thickness(thickness: f64) -> Self {
        Self { thickness, _topology: PhantomData }
    }

    /// Tangent stiffness, internal force, and stress/strain export tables
    /// at the given displacement state.
    pub fn stiffness_force_and_fields<M: ConstitutiveLaw + ?Sized>(
        &self,
        x_ref: &DVector<f64>,
        u: &DVector<f64>,
        law: &M,
    ) -> Result<KernelOutput> {
        check_len::<G>("reference coordinates", x_ref)?;
        check_len::<G>("displacements", u)?;

        let coords = node_table::<G>(x_ref);
        let disp = node_table::<G>(u);
        let ndof = G::dofs();
        let points = G::integration_points();
        let mut stiffness = DMatrix::zeros(ndof, ndof);
        let mut force = DVector::zeros(ndof);
        let mut gauss_stress = DMatrix::zeros(points.len(), G::VOIGT);
        let mut gauss_strain = DMatrix::zeros(points.len(), G::VOIGT);
        let scale = plane_scale::<G>(self.thickness);

        for (index, ip) in points.iter().enumerate() {
            let grad_ref = G::shape_derivatives(&ip.xi);
            let point = kinematics::reference_gradients(&coords, &grad_ref, index)?;
            let h = kinematics::displacement_gradient(&disp, &point.grad_phys);
            let f_def = kinematics::deformation_gradient(&h);
            let strain = kinematics::green_lagrange(&f_def);

            let (stress, stress_voigt, tangent) = material_response::<G, M>(law, &strain)?;
            let b = lagrangian_b(&point.grad_phys, &f_def);
            let w = ip.weight * point.det_j * scale;

            force += (b.transpose() * &stress_voigt) * w;
            // Material part plus the initial-stress (geometric) part; the
            // latter is the scatter expansion of the scalar node coupling
            // through the current stress.
            let coupling = &point.grad_phys * &stress * point.grad_phys.transpose();
            stiffness += (b.transpose() * &tangent * &b) * w;
            stiffness += scatter(&coupling, G::DIM) * w;

            gauss_stress.row_mut(index).copy_from(&stress_voigt.transpose());
            gauss_strain
                .row_mut(index)
                .copy_from(&strain_voigt_row(&strain).transpose());
        }

        Ok(KernelOutput { stiffness, internal_force: force, gauss_stress, gauss_strain })
    }

    /// Least-squares extrapolation of integration-point rows to nodes.
    ///
    /// Fits nodal values whose shape-function interpolation reproduces the
    /// integration-point values; with a single-point rule every node
    /// receives that point's value.
    pub fn extrapolate_to_nodes(&self, gauss_rows: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        let points = G::integration_points();
        if gauss_rows.nrows() != points.len() {
            return Err(ElementError::ShapeMismatch {
                what: "integration-point rows",
                expected: points.len(),
                found: gauss_rows.nrows(),
            });
        }
        let mut values = DMatrix::zeros(points.len(), G::NODES);
        for (index, ip) in points.iter().enumerate() {
            values.row_mut(index).copy_from(&G::shape_functions(&ip.xi).transpose());
        }
        let pinv = values
            .pseudo_inverse(EXTRAPOLATION_SVD_EPS)
            .map_err(|_| ElementError::ExtrapolationFailed {
                tolerance: EXTRAPOLATION_SVD_EPS,
            })?;
        Ok(pinv * gauss_rows)
    }
}

fn check_len<G: ElementGeometry>(what: &'static str, v: &DVector<f64>) -> Result<()> {
    if v.len() != G::dofs() {
        return Err(ElementError::ShapeMismatch {
            what,
            expected: G::dofs(),
            found: v.len(),
        });
    }
    Ok(())
}

/// Reshape a flattened node-major vector into the `n x d` node table.
fn node_table<G: ElementGeometry>(v: &DVector<f64>) -> DMatrix<f64> {
    DMatrix::from_fn(G::NODES, G::DIM, |i, a| v[G::DIM * i + a])
}

fn plane_scale<G: ElementGeometry>(thickness: f64) -> f64 {
    if G::DIM == 2 { thickness } else { 1.0 }
}

/// Dimension-dispatched constitutive call, widened to dynamic shapes for the
/// accumulation loops.
fn material_response<G: ElementGeometry, M: ConstitutiveLaw + ?Sized>(
    law: &M,
    strain: &DMatrix<f64>,
) -> Result<(DMatrix<f64>, DVector<f64>, DMatrix<f64>)> {
    match G::DIM {
        2 => {
            let e = Matrix2::from_fn(|i, j| strain[(i, j)]);
            let r = law.response_2d(&e)?;
            Ok((
                DMatrix::from_fn(2, 2, |i, j| r.stress[(i, j)]),
                DVector::from_iterator(3, r.stress_voigt.iter().copied()),
                DMatrix::from_fn(3, 3, |i, j| r.tangent[(i, j)]),
            ))
        }
        3 => {
            let e = Matrix3::from_fn(|i, j| strain[(i, j)]);
            let r = law.response_3d(&e)?;
            Ok((
                DMatrix::from_fn(3, 3, |i, j| r.stress[(i, j)]),
                DVector::from_iterator(6, r.stress_voigt.iter().copied()),
                DMatrix::from_fn(6, 6, |i, j| r.tangent[(i, j)]),
            ))
        }
        _ => unreachable!("element dimension is 2 or 3"),
    }
}

/// Voigt strain row with engineering shear.
fn strain_voigt_row(strain: &DMatrix<f64>) -> DVector<f64> {
    match strain.nrows() {
        2 => DVector::from_vec(vec![
            strain[(0, 0)],
            strain[(1, 1)],
            2.0 * strain[(0, 1)],
        ]),
        3 => DVector::from_vec(vec![
            strain[(0, 0)],
            strain[(1, 1)],
            strain[(2, 2)],
            2.0 * strain[(0, 1)],
            2.0 * strain[(1, 2)],
            2.0 * strain[(0, 2)],
        ]),
        _ => unreachable!("element dimension is 2 or 3"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Tet4, Tri3};
    use approx::assert_relative_eq;
    use fel_material::{KirchhoffMaterial, Plane2d};
    use nalgebra::{DMatrix, DVector};

    fn unit_triangle() -> DVector<f64> {
        DVector::from_vec(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0])
    }

    #[test]
    fn constant_strain_patch() {
        // Linear displacement field u_x = a * x on a unit triangle gives a
        // uniform eps_xx = a everywhere; check the internal force against
        // the closed-form B^T sigma A t.
        let mat = KirchhoffMaterial::new(100.0, 0.25)
            .unwrap()
            .with_plane(Plane2d::Strain);
        let a = 1.0e-3;
        let u = DVector::from_vec(vec![0.0, 0.0, a, 0.0, 0.0, 0.0]);
        let kernel = SmallStrainKernel::<Tri3>::with_thickness(2.0);
        let (k, f) = kernel.stiffness_and_force(&unit_triangle(), &u, &mat).unwrap();

        // f = K u for a linear material at small strain.
        let ku = &k * &u;
        for i in 0..6 {
            assert_relative_eq!(f[i], ku[i], epsilon = 1e-12 * 100.0);
        }
        // Uniform state: force on node 1 in x is sigma_xx * t * 1/2 (edge
        // projection of the constant stress divergence).
        let c = mat.tangent_2d();
        let sigma_xx = c[(0, 0)] * a;
        assert_relative_eq!(f[2], sigma_xx * 2.0 * 0.5, max_relative = 1e-10);
    }

    #[test]
    fn zero_displacement_zero_force() {
        let mat = KirchhoffMaterial::new(210e9, 0.3).unwrap();
        let x_ref = DVector::from_vec(vec![
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ]);
        let u = DVector::zeros(12);
        let out = FiniteStrainKernel::<Tet4>::new()
            .stiffness_force_and_fields(&x_ref, &u, &mat)
            .unwrap();
        for v in out.internal_force.iter() {
            assert_relative_eq!(*v, 0.0, epsilon = 1e-9);
        }
        for v in out.gauss_stress.iter() {
            assert_relative_eq!(*v, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn shape_mismatch_fails_fast() {
        let mat = KirchhoffMaterial::new(210e9, 0.3).unwrap();
        let short = DVector::zeros(5);
        let err = SmallStrainKernel::<Tri3>::new()
            .stiffness_and_force(&short, &DVector::zeros(6), &mat)
            .unwrap_err();
        assert!(matches!(
            err,
            ElementError::ShapeMismatch { expected: 6, found: 5, .. }
        ));
    }

    #[test]
    fn extrapolation_failure_reports_its_tolerance() {
        // The pseudo-inverse failure path carries the SVD cutoff rather
        // than a made-up determinant.
        let err = ElementError::ExtrapolationFailed { tolerance: EXTRAPOLATION_SVD_EPS };
        assert_eq!(
            err.to_string(),
            "nodal extrapolation failed: no pseudo-inverse at tolerance 1.0e-12"
        );
    }

    #[test]
    fn single_point_extrapolation_copies_value() {
        let gauss = DMatrix::from_row_slice(1, 3, &[3.0, -1.0, 0.5]);
        let nodal = FiniteStrainKernel::<Tri3>::new()
            .extrapolate_to_nodes(&gauss)
            .unwrap();
        assert_eq!(nodal.shape(), (3, 3));
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(nodal[(i, j)], gauss[(0, j)], epsilon = 1e-10);
            }
        }
    }
}
