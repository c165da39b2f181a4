//! Grid initialization.
//!
//! Two passes, both cell-independent:
//! 1. a zero pass over every array, borders included;
//! 2. an interior pass over `[1, n-2]` on each axis that writes the stencil
//!    coefficients, the boundary mask and the seed pressure gradient.
//!
//! Border cells keep their zero-pass values, so the one-cell boundary layer
//! reads as zero pressure during every sweep. Re-running the initializer is
//! idempotent.

use rayon::prelude::*;

use crate::config::GridSize;
use crate::constants::{A_COMPONENTS, B_COMPONENTS, C_COMPONENTS, STENCIL_NORM};
use crate::grid::Grid3D;

/// Populate all fields of a freshly allocated (or previously used) grid.
pub fn initialize(grid: &mut Grid3D) {
    let size = grid.size;
    let cells = size.cells();

    // Zero pass over everything, borders included.
    grid.a.fill(0.0);
    grid.b.fill(0.0);
    grid.c.fill(0.0);
    grid.p.fill(0.0);
    grid.bnd.fill(0.0);
    grid.wrk1.fill(0.0);
    grid.wrk2.fill(0.0);

    // Interior pass: coefficients, mask, source term.
    for m in 0..3 {
        fill_interior(&mut grid.a[m * cells..(m + 1) * cells], size, 1.0);
    }
    fill_interior(&mut grid.a[3 * cells..A_COMPONENTS * cells], size, STENCIL_NORM);
    for m in 0..B_COMPONENTS {
        fill_interior(&mut grid.b[m * cells..(m + 1) * cells], size, 0.0);
    }
    for m in 0..C_COMPONENTS {
        fill_interior(&mut grid.c[m * cells..(m + 1) * cells], size, 1.0);
    }
    fill_interior(&mut grid.bnd, size, 1.0);
    fill_interior(&mut grid.wrk1, size, 0.0);

    seed_pressure(&mut grid.p, size);
}

/// Set every interior cell of a `cells`-sized buffer to `value`, in parallel
/// over x-slabs.
fn fill_interior(buf: &mut [f32], size: GridSize, value: f32) {
    let (ny, nz) = (size.ny(), size.nz());
    let slab = ny * nz;
    buf[slab..(size.nx() - 1) * slab]
        .par_chunks_mut(slab)
        .for_each(|cells| {
            for j in 1..ny - 1 {
                let row = j * nz;
                cells[row + 1..row + nz - 1].fill(value);
            }
        });
}

/// Seed the pressure field with the smooth gradient `p = i^2 / (nx-2)^2`
/// along the x axis, independent of j and k.
fn seed_pressure(p: &mut [f32], size: GridSize) {
    let (nx, ny, nz) = (size.nx(), size.ny(), size.nz());
    let slab = ny * nz;
    let denom = ((nx - 2) * (nx - 2)) as f32;
    p[slab..(nx - 1) * slab]
        .par_chunks_mut(slab)
        .enumerate()
        .for_each(|(s, cells)| {
            let i = s + 1;
            let value = (i * i) as f32 / denom;
            for j in 1..ny - 1 {
                let row = j * nz;
                cells[row + 1..row + nz - 1].fill(value);
            }
        });
}
