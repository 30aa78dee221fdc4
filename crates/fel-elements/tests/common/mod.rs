//! Shared reference geometries and displacement fields for the kernel
//! test suites.
#![allow(dead_code)]

use fel_elements::Topology;
use nalgebra::DVector;

/// Reference node coordinates (flattened, node-major) of a well-shaped
/// element of each topology.
pub fn reference_coords(topology: Topology) -> DVector<f64> {
    let coords: Vec<f64> = match topology {
        Topology::Tri3 => vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        Topology::Tri6 => vec![
            0.0, 0.0, 1.0, 0.0, 0.0, 1.0,
            0.5, 0.0, 0.5, 0.5, 0.0, 0.5,
        ],
        Topology::Tet4 => vec![
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ],
        Topology::Tet10 => vec![
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
            0.5, 0.0, 0.0,
            0.5, 0.5, 0.0,
            0.0, 0.5, 0.0,
            0.0, 0.0, 0.5,
            0.5, 0.0, 0.5,
            0.0, 0.5, 0.5,
        ],
        Topology::Hex8 => vec![
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            1.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
            1.0, 0.0, 1.0,
            1.0, 1.0, 1.0,
            0.0, 1.0, 1.0,
        ],
        Topology::Hex20 => vec![
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            1.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
            1.0, 0.0, 1.0,
            1.0, 1.0, 1.0,
            0.0, 1.0, 1.0,
            0.5, 0.0, 0.0,
            1.0, 0.5, 0.0,
            0.5, 1.0, 0.0,
            0.0, 0.5, 0.0,
            0.5, 0.0, 1.0,
            1.0, 0.5, 1.0,
            0.5, 1.0, 1.0,
            0.0, 0.5, 1.0,
            0.0, 0.0, 0.5,
            1.0, 0.0, 0.5,
            1.0, 1.0, 0.5,
            0.0, 1.0, 0.5,
        ],
    };
    DVector::from_vec(coords)
}

/// Smooth, deterministic displacement field sampled at the nodes:
/// a small affine map plus mild quadratic terms, so quadratic elements see
/// non-constant strain.
pub fn sample_displacement(topology: Topology, amplitude: f64) -> DVector<f64> {
    let coords = reference_coords(topology);
    let d = topology.dim();
    let n = topology.nodes();
    let mut u = DVector::zeros(n * d);
    for i in 0..n {
        let x = coords[d * i];
        let y = coords[d * i + 1];
        let z = if d == 3 { coords[d * i + 2] } else { 0.0 };
        u[d * i] = amplitude * (0.4 * x + 0.2 * y - 0.1 * z + 0.3 * x * y);
        u[d * i + 1] = amplitude * (-0.15 * x + 0.35 * y + 0.25 * z + 0.2 * y * y);
        if d == 3 {
            u[d * i + 2] = amplitude * (0.1 * x - 0.2 * y + 0.45 * z + 0.15 * x * z);
        }
    }
    u
}

/// Deterministic perturbation direction with unit-free components.
pub fn perturbation(len: usize) -> DVector<f64> {
    DVector::from_fn(len, |i, _| (1.3 * i as f64 + 0.7).sin())
}
