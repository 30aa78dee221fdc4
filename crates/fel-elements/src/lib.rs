//! Element-level kernels for nonlinear solid mechanics.
//!
//! Given an element's reference nodal coordinates and current nodal
//! displacements, the kernels here compute the tangent stiffness matrix,
//! the internal force vector, the consistent mass matrix and exported
//! stress/strain fields, for a fixed catalogue of topologies: linear and
//! quadratic triangles, tetrahedra and hexahedra.
//!
//! Data flows strictly bottom-up per evaluation: geometry -> kinematics ->
//! strain-displacement operator -> constitutive callback -> accumulation.
//! No state is held across calls; every evaluation is a pure function of
//! its inputs. Global assembly, nonlinear drivers and I/O are the caller's
//! business.

pub mod batch;
pub mod bmatrix;
pub mod elements;
pub mod error;
pub mod factory;
pub mod kernel;
pub mod kinematics;
pub mod linalg;
pub mod mass;

pub use batch::{EvalRequest, evaluate_all};
pub use elements::{ElementGeometry, Hex8, Hex20, IntegrationPoint, Tet4, Tet10, Tri3, Tri6};
pub use error::{ElementError, Result};
pub use factory::{ElementResult, StrainFamily, StressStrainFields, Topology};
pub use kernel::{FiniteStrainKernel, KernelOutput, SmallStrainKernel};
pub use mass::consistent_mass;
