//! Data-parallel evaluation of element batches.
//!
//! Each element kernel call is a pure function of its inputs, so a batch is
//! embarrassingly parallel: one element per rayon task, no synchronization.
//! Constitutive laws are invoked concurrently without a lock, which the
//! `Send + Sync` bound on [`ConstitutiveLaw`] guarantees is sound.
//!
//! Failures are reported per element; a degenerate element does not abort
//! the rest of the batch. The caller (the global assembly loop) decides how
//! to react.

use crate::error::Result;
use crate::factory::{self, ElementResult, StrainFamily, Topology};
use fel_material::ConstitutiveLaw;
use nalgebra::DVector;
use rayon::prelude::*;

/// One element evaluation request.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalRequest {
    pub topology: Topology,
    pub family: StrainFamily,
    /// Flattened reference coordinates, node-major, length `n * d`.
    pub coords: DVector<f64>,
    /// Flattened nodal displacements, length `n * d`.
    pub displacement: DVector<f64>,
    /// 2-D thickness; ignored for 3-D topologies.
    pub thickness: f64,
}

/// Evaluate all requests in parallel, preserving order.
pub fn evaluate_all<M: ConstitutiveLaw + ?Sized>(
    requests: &[EvalRequest],
    law: &M,
) -> Vec<Result<ElementResult>> {
    log::debug!("evaluating {} element kernels in parallel", requests.len());
    requests
        .par_iter()
        .map(|r| {
            factory::evaluate(
                r.topology,
                r.family,
                &r.coords,
                &r.displacement,
                r.thickness,
                law,
            )
        })
        .collect()
}
