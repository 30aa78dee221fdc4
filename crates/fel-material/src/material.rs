//! Reference material: St. Venant-Kirchhoff elasticity.

use crate::error::{MaterialError, Result};
use crate::law::{ConstitutiveLaw, Response2d, Response3d};
use crate::voigt;
use nalgebra::{Matrix2, Matrix3, Matrix6};
use serde::{Deserialize, Serialize};

/// Idealization used for the 2-D tangent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Plane2d {
    /// Thin structures: zero out-of-plane stress.
    Stress,
    /// Thick structures: zero out-of-plane strain.
    #[default]
    Strain,
}

/// St. Venant-Kirchhoff material.
///
/// The stress is linear in the strain measure, `S_voigt = C * E_voigt`, with
/// a constant tangent `C` built from Young's modulus and Poisson's ratio.
/// Linearity makes the same law valid for the small-strain kernels (where
/// the measure is the symmetric displacement gradient) and the
/// finite-strain kernels (Green-Lagrange strain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KirchhoffMaterial {
    /// Young's modulus E [Pa].
    pub youngs_modulus: f64,
    /// Poisson's ratio [-].
    pub poissons_ratio: f64,
    /// Mass density [kg/m^3], optional for static analysis.
    pub density: Option<f64>,
    /// 2-D idealization; ignored by the 3-D response.
    pub plane: Plane2d,
}

impl KirchhoffMaterial {
    /// Create a new material, validating the parameter ranges.
    pub fn new(youngs_modulus: f64, poissons_ratio: f64) -> Result<Self> {
        if !youngs_modulus.is_finite() || youngs_modulus <= 0.0 {
            return Err(MaterialError::InvalidParameter(
                "Young's modulus must be positive".into(),
            ));
        }
        if poissons_ratio <= -1.0 || poissons_ratio >= 0.5 {
            return Err(MaterialError::InvalidParameter(
                "Poisson's ratio must be in range (-1, 0.5)".into(),
            ));
        }
        Ok(Self {
            youngs_modulus,
            poissons_ratio,
            density: None,
            plane: Plane2d::default(),
        })
    }

    /// Attach a mass density.
    pub fn with_density(mut self, density: f64) -> Result<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(MaterialError::InvalidParameter(
                "density must be positive".into(),
            ));
        }
        self.density = Some(density);
        Ok(self)
    }

    /// Select the 2-D idealization.
    pub fn with_plane(mut self, plane: Plane2d) -> Self {
        self.plane = plane;
        self
    }

    /// Shear modulus G = E / (2(1 + nu)).
    pub fn shear_modulus(&self) -> f64 {
        self.youngs_modulus / (2.0 * (1.0 + self.poissons_ratio))
    }

    /// Lame's first parameter.
    pub fn lame_lambda(&self) -> f64 {
        let e = self.youngs_modulus;
        let nu = self.poissons_ratio;
        e * nu / ((1.0 + nu) * (1.0 - 2.0 * nu))
    }

    /// Constant 6x6 tangent for 3-D elements.
    pub fn tangent_3d(&self) -> Matrix6<f64> {
        let e = self.youngs_modulus;
        let nu = self.poissons_ratio;
        let factor = e / ((1.0 + nu) * (1.0 - 2.0 * nu));
        let c11 = factor * (1.0 - nu);
        let c12 = factor * nu;
        let c44 = factor * (1.0 - 2.0 * nu) / 2.0;

        Matrix6::new(
            c11, c12, c12, 0.0, 0.0, 0.0,
            c12, c11, c12, 0.0, 0.0, 0.0,
            c12, c12, c11, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, c44, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0, c44, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0, c44,
        )
    }

    /// Constant 3x3 tangent for 2-D elements, per the selected idealization.
    pub fn tangent_2d(&self) -> Matrix3<f64> {
        let e = self.youngs_modulus;
        let nu = self.poissons_ratio;
        match self.plane {
            Plane2d::Stress => {
                let factor = e / (1.0 - nu * nu);
                Matrix3::new(
                    factor, factor * nu, 0.0,
                    factor * nu, factor, 0.0,
                    0.0, 0.0, factor * (1.0 - nu) / 2.0,
                )
            }
            Plane2d::Strain => {
                let factor = e / ((1.0 + nu) * (1.0 - 2.0 * nu));
                Matrix3::new(
                    factor * (1.0 - nu), factor * nu, 0.0,
                    factor * nu, factor * (1.0 - nu), 0.0,
                    0.0, 0.0, factor * (1.0 - 2.0 * nu) / 2.0,
                )
            }
        }
    }
}

impl ConstitutiveLaw for KirchhoffMaterial {
    fn response_2d(&self, strain: &Matrix2<f64>) -> Result<Response2d> {
        if strain.iter().any(|v| !v.is_finite()) {
            return Err(MaterialError::InvalidStrain(
                "non-finite strain component".into(),
            ));
        }
        let tangent = self.tangent_2d();
        let stress_voigt = tangent * voigt::strain_to_voigt_2d(strain);
        Ok(Response2d {
            stress: voigt::stress_from_voigt_2d(&stress_voigt),
            stress_voigt,
            tangent,
        })
    }

    fn response_3d(&self, strain: &Matrix3<f64>) -> Result<Response3d> {
        if strain.iter().any(|v| !v.is_finite()) {
            return Err(MaterialError::InvalidStrain(
                "non-finite strain component".into(),
            ));
        }
        let tangent = self.tangent_3d();
        let stress_voigt = tangent * voigt::strain_to_voigt_3d(strain);
        Ok(Response3d {
            stress: voigt::stress_from_voigt_3d(&stress_voigt),
            stress_voigt,
            tangent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Matrix3 as M3;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(KirchhoffMaterial::new(-1.0, 0.3).is_err());
        assert!(KirchhoffMaterial::new(210e9, 0.5).is_err());
        assert!(KirchhoffMaterial::new(210e9, -1.0).is_err());
        assert!(KirchhoffMaterial::new(210e9, 0.3).is_ok());
        assert!(
            KirchhoffMaterial::new(210e9, 0.3)
                .unwrap()
                .with_density(-7800.0)
                .is_err()
        );
    }

    #[test]
    fn uniaxial_stress_3d() {
        // Uniaxial strain state; check the normal stresses against lambda/mu.
        let mat = KirchhoffMaterial::new(210e9, 0.3).unwrap();
        let eps = 1.0e-3;
        let mut strain = M3::zeros();
        strain[(0, 0)] = eps;
        let r = mat.response_3d(&strain).unwrap();

        let lambda = mat.lame_lambda();
        let mu = mat.shear_modulus();
        assert_relative_eq!(r.stress_voigt[0], (lambda + 2.0 * mu) * eps, max_relative = 1e-12);
        assert_relative_eq!(r.stress_voigt[1], lambda * eps, max_relative = 1e-12);
        assert_relative_eq!(r.stress_voigt[2], lambda * eps, max_relative = 1e-12);
        assert_relative_eq!(r.stress_voigt[3], 0.0);
    }

    #[test]
    fn pure_shear_3d() {
        let mat = KirchhoffMaterial::new(210e9, 0.3).unwrap();
        let g = 5.0e-4; // tensor shear strain e_xy
        let mut strain = M3::zeros();
        strain[(0, 1)] = g;
        strain[(1, 0)] = g;
        let r = mat.response_3d(&strain).unwrap();
        // s_xy = 2 mu e_xy = G * gamma
        assert_relative_eq!(r.stress_voigt[3], mat.shear_modulus() * 2.0 * g, max_relative = 1e-12);
        assert_relative_eq!(r.stress[(0, 1)], r.stress_voigt[3]);
    }

    #[test]
    fn plane_stress_has_no_out_of_plane_coupling() {
        let mat = KirchhoffMaterial::new(70e9, 0.33)
            .unwrap()
            .with_plane(Plane2d::Stress);
        let c = mat.tangent_2d();
        // Uniaxial in-plane stress: s_xx = E * e_xx when e_yy = -nu e_xx.
        let e_xx = 1.0e-3;
        let e_yy = -0.33 * e_xx;
        let s_xx = c[(0, 0)] * e_xx + c[(0, 1)] * e_yy;
        assert_relative_eq!(s_xx, 70e9 * e_xx, max_relative = 1e-12);
    }

    #[test]
    fn tangents_are_symmetric() {
        let mat = KirchhoffMaterial::new(210e9, 0.3).unwrap();
        let c3 = mat.tangent_3d();
        assert_eq!(c3, c3.transpose());
        for plane in [Plane2d::Stress, Plane2d::Strain] {
            let c2 = mat.clone().with_plane(plane).tangent_2d();
            assert_eq!(c2, c2.transpose());
        }
    }

    #[test]
    fn rejects_non_finite_strain() {
        let mat = KirchhoffMaterial::new(210e9, 0.3).unwrap();
        let mut strain = M3::zeros();
        strain[(0, 0)] = f64::NAN;
        assert!(matches!(
            mat.response_3d(&strain),
            Err(MaterialError::InvalidStrain(_))
        ));
    }
}
