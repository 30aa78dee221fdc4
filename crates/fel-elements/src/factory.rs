//! Runtime topology dispatch.
//!
//! The topology catalogue is a closed set; this module owns the single
//! `match` that selects the monomorphized kernels, so callers that know
//! their element types only at runtime (mesh imports, batch evaluation)
//! stay free of generics.

use crate::elements::{ElementGeometry, Hex8, Hex20, Tet4, Tet10, Tri3, Tri6};
use crate::error::Result;
use crate::kernel::{FiniteStrainKernel, SmallStrainKernel};
use crate::mass;
use fel_material::ConstitutiveLaw;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Element topology tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    Tri3,
    Tri6,
    Tet4,
    Tet10,
    Hex8,
    Hex20,
}

impl Topology {
    /// Every supported topology, in catalogue order.
    pub const ALL: [Topology; 6] = [
        Topology::Tri3,
        Topology::Tri6,
        Topology::Tet4,
        Topology::Tet10,
        Topology::Hex8,
        Topology::Hex20,
    ];

    /// Node count `n`.
    pub fn nodes(self) -> usize {
        match self {
            Topology::Tri3 => 3,
            Topology::Tri6 => 6,
            Topology::Tet4 => 4,
            Topology::Tet10 => 10,
            Topology::Hex8 => 8,
            Topology::Hex20 => 20,
        }
    }

    /// Spatial dimension `d`.
    pub fn dim(self) -> usize {
        match self {
            Topology::Tri3 | Topology::Tri6 => 2,
            _ => 3,
        }
    }

    /// Independent strain components `c = d(d+1)/2`.
    pub fn voigt_components(self) -> usize {
        match self.dim() {
            2 => 3,
            _ => 6,
        }
    }

    /// Degrees of freedom `n * d`.
    pub fn dofs(self) -> usize {
        self.nodes() * self.dim()
    }
}

/// Kinematic family of a kernel evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrainFamily {
    /// Linearized kinematics, no export tables.
    Small,
    /// Total-Lagrangian kinematics with stress/strain export.
    Finite,
}

/// Stress/strain export tables of a finite-strain evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct StressStrainFields {
    /// One Voigt row per integration point.
    pub gauss_stress: DMatrix<f64>,
    pub gauss_strain: DMatrix<f64>,
    /// One Voigt row per node, extrapolated through the shape functions.
    pub nodal_stress: DMatrix<f64>,
    pub nodal_strain: DMatrix<f64>,
}

/// Result of one element kernel evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementResult {
    pub stiffness: DMatrix<f64>,
    pub internal_force: DVector<f64>,
    /// Present for [`StrainFamily::Finite`] evaluations.
    pub fields: Option<StressStrainFields>,
}

/// Evaluate one element kernel.
///
/// `thickness` multiplies every integration weight for the 2-D topologies
/// and is ignored in 3-D.
pub fn evaluate<M: ConstitutiveLaw + ?Sized>(
    topology: Topology,
    family: StrainFamily,
    x_ref: &DVector<f64>,
    u: &DVector<f64>,
    thickness: f64,
    law: &M,
) -> Result<ElementResult> {
    match topology {
        Topology::Tri3 => evaluate_one::<Tri3, M>(family, x_ref, u, thickness, law),
        Topology::Tri6 => evaluate_one::<Tri6, M>(family, x_ref, u, thickness, law),
        Topology::Tet4 => evaluate_one::<Tet4, M>(family, x_ref, u, thickness, law),
        Topology::Tet10 => evaluate_one::<Tet10, M>(family, x_ref, u, thickness, law),
        Topology::Hex8 => evaluate_one::<Hex8, M>(family, x_ref, u, thickness, law),
        Topology::Hex20 => evaluate_one::<Hex20, M>(family, x_ref, u, thickness, law),
    }
}

/// Consistent mass matrix for one element.
pub fn consistent_mass(
    topology: Topology,
    x_ref: &DVector<f64>,
    density: f64,
    thickness: f64,
) -> Result<DMatrix<f64>> {
    match topology {
        Topology::Tri3 => mass::consistent_mass::<Tri3>(x_ref, density, thickness),
        Topology::Tri6 => mass::consistent_mass::<Tri6>(x_ref, density, thickness),
        Topology::Tet4 => mass::consistent_mass::<Tet4>(x_ref, density, thickness),
        Topology::Tet10 => mass::consistent_mass::<Tet10>(x_ref, density, thickness),
        Topology::Hex8 => mass::consistent_mass::<Hex8>(x_ref, density, thickness),
        Topology::Hex20 => mass::consistent_mass::<Hex20>(x_ref, density, thickness),
    }
}

fn evaluate_one<G: ElementGeometry, M: ConstitutiveLaw + ?Sized>(
    family: StrainFamily,
    x_ref: &DVector<f64>,
    u: &DVector<f64>,
    thickness: f64,
    law: &M,
) -> Result<ElementResult> {
    match family {
        StrainFamily::Small => {
            let (stiffness, internal_force) =
                SmallStrainKernel::<G>::with_thickness(thickness).stiffness_and_force(x_ref, u, law)?;
            Ok(ElementResult { stiffness, internal_force, fields: None })
        }
        StrainFamily::Finite => {
            let kernel = FiniteStrainKernel::<G>::with_thickness(thickness);
            let out = kernel.stiffness_force_and_fields(x_ref, u, law)?;
            let nodal_stress = kernel.extrapolate_to_nodes(&out.gauss_stress)?;
            let nodal_strain = kernel.extrapolate_to_nodes(&out.gauss_strain)?;
            Ok(ElementResult {
                stiffness: out.stiffness,
                internal_force: out.internal_force,
                fields: Some(StressStrainFields {
                    gauss_stress: out.gauss_stress,
                    gauss_strain: out.gauss_strain,
                    nodal_stress,
                    nodal_strain,
                }),
            })
        }
    }
}
