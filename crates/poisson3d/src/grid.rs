//! Flat 3-D grid storage for the relaxation solver.
//!
//! Every field is a single contiguous `Vec<f32>` indexed with the z axis
//! fastest: `index(i, j, k) = (i * ny + j) * nz + k`. Coefficient sets carry
//! an extra leading component axis and are stored component-major, so each
//! component is itself a contiguous `cells`-sized block.
//!
//! All arrays are allocated once at the configured shape and never resized.

use crate::config::GridSize;
use crate::constants::{A_COMPONENTS, B_COMPONENTS, C_COMPONENTS};

/// Dense storage for one solver instance.
///
/// Fields:
/// - `a`, `b`, `c`: per-cell stencil coefficients, immutable after
///   initialization
/// - `p`: the pressure field, updated every iteration
/// - `bnd`: boundary mask (0 or 1), disables the correction at boundary cells
/// - `wrk1`: additive source term, constant across iterations
/// - `wrk2`: scratch field receiving the new pressure values during a sweep
#[derive(Clone, Debug)]
pub struct Grid3D {
    pub size: GridSize,
    pub a: Vec<f32>,
    pub b: Vec<f32>,
    pub c: Vec<f32>,
    pub p: Vec<f32>,
    pub bnd: Vec<f32>,
    pub wrk1: Vec<f32>,
    pub wrk2: Vec<f32>,
}

impl Grid3D {
    /// Allocate zeroed storage for the given dimensions.
    pub fn new(size: GridSize) -> Self {
        let cells = size.cells();
        Self {
            size,
            a: vec![0.0; A_COMPONENTS * cells],
            b: vec![0.0; B_COMPONENTS * cells],
            c: vec![0.0; C_COMPONENTS * cells],
            p: vec![0.0; cells],
            bnd: vec![0.0; cells],
            wrk1: vec![0.0; cells],
            wrk2: vec![0.0; cells],
        }
    }

    /// Index into cell-centered arrays (`p`, `bnd`, `wrk1`, `wrk2`).
    #[inline]
    pub fn cell_index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.size.nx(), "i={} out of bounds", i);
        debug_assert!(j < self.size.ny(), "j={} out of bounds", j);
        debug_assert!(k < self.size.nz(), "k={} out of bounds", k);
        (i * self.size.ny() + j) * self.size.nz() + k
    }

    /// Index into a coefficient set with component `m` leading.
    #[inline]
    pub fn coeff_index(&self, m: usize, i: usize, j: usize, k: usize) -> usize {
        m * self.size.cells() + self.cell_index(i, j, k)
    }
}
