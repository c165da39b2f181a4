//! The 19-point relaxation kernel, residual reduction and commit pass.
//!
//! One iteration is two passes with a barrier between them:
//! - [`relax_pass`] reads the current pressure field, writes the new value of
//!   every interior cell into the scratch field and returns the summed
//!   squared residual;
//! - [`commit_pass`] copies the scratch interior back into the pressure
//!   field.
//!
//! Within a pass every cell is independent: the kernel reads only `p` (never
//! `wrk2`), and no two cells write the same scratch location. Both passes are
//! parallelized over x-slabs; the sequential call order supplies the
//! inter-pass barrier.

use rayon::prelude::*;

use crate::constants::OMEGA;
use crate::grid::Grid3D;

/// One Jacobi sweep over the interior. Fills `wrk2` and returns the residual
/// sum (`gosa`) for this iteration.
///
/// Partial sums are accumulated per slab in `f64` and combined in arbitrary
/// order; the reduction is associative-safe but not bit-reproducible across
/// worker counts.
pub fn relax_pass(grid: &mut Grid3D) -> f64 {
    let (nx, ny, nz) = (grid.size.nx(), grid.size.ny(), grid.size.nz());
    let slab = ny * nz;
    let cells = grid.size.cells();

    let a = &grid.a;
    let b = &grid.b;
    let c = &grid.c;
    let p = &grid.p;
    let bnd = &grid.bnd;
    let wrk1 = &grid.wrk1;

    grid.wrk2[slab..(nx - 1) * slab]
        .par_chunks_mut(slab)
        .enumerate()
        .map(|(s, out)| {
            let base = (s + 1) * slab;
            let mut partial = 0.0_f64;
            for j in 1..ny - 1 {
                for k in 1..nz - 1 {
                    let idx = base + j * nz + k;
                    let s0 = a[idx] * p[idx + slab]
                        + a[cells + idx] * p[idx + nz]
                        + a[2 * cells + idx] * p[idx + 1]
                        + b[idx]
                            * (p[idx + slab + nz] - p[idx + slab - nz] - p[idx - slab + nz]
                                + p[idx - slab - nz])
                        + b[cells + idx]
                            * (p[idx + nz + 1] - p[idx - nz + 1] - p[idx + nz - 1]
                                + p[idx - nz - 1])
                        + b[2 * cells + idx]
                            * (p[idx + slab + 1] - p[idx - slab + 1] - p[idx + slab - 1]
                                + p[idx - slab - 1])
                        + c[idx] * p[idx - slab]
                        + c[cells + idx] * p[idx - nz]
                        + c[2 * cells + idx] * p[idx - 1]
                        + wrk1[idx];

                    let ss = (s0 * a[3 * cells + idx] - p[idx]) * bnd[idx];
                    out[j * nz + k] = p[idx] + OMEGA * ss;
                    partial += f64::from(ss) * f64::from(ss);
                }
            }
            partial
        })
        .sum()
}

/// Copy the scratch interior back into the pressure field. Must not run
/// until the relax pass for the iteration has fully finished.
pub fn commit_pass(grid: &mut Grid3D) {
    let (nx, ny, nz) = (grid.size.nx(), grid.size.ny(), grid.size.nz());
    let slab = ny * nz;

    let wrk2 = &grid.wrk2;
    grid.p[slab..(nx - 1) * slab]
        .par_chunks_mut(slab)
        .zip(wrk2[slab..(nx - 1) * slab].par_chunks(slab))
        .for_each(|(dst, src)| {
            for j in 1..ny - 1 {
                let row = j * nz;
                dst[row + 1..row + nz - 1].copy_from_slice(&src[row + 1..row + nz - 1]);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridSize;
    use crate::init;

    fn solver_grid(n: usize) -> Grid3D {
        let mut grid = Grid3D::new(GridSize::new(n, n, n).unwrap());
        init::initialize(&mut grid);
        grid
    }

    #[test]
    fn test_relax_produces_finite_residual() {
        let mut grid = solver_grid(9);
        let gosa = relax_pass(&mut grid);
        assert!(gosa.is_finite());
        assert!(gosa > 0.0, "seeded grid is not a solution, gosa = {}", gosa);
    }

    #[test]
    fn test_relax_does_not_touch_pressure() {
        let mut grid = solver_grid(9);
        let before = grid.p.clone();
        relax_pass(&mut grid);
        assert_eq!(grid.p, before);
    }

    #[test]
    fn test_relax_leaves_scratch_borders_zero() {
        let mut grid = solver_grid(9);
        relax_pass(&mut grid);
        for &(i, j, k) in &[(0, 4, 4), (8, 4, 4), (4, 0, 4), (4, 8, 4), (4, 4, 0), (4, 4, 8)] {
            assert_eq!(grid.wrk2[grid.cell_index(i, j, k)], 0.0);
        }
    }

    #[test]
    fn test_commit_copies_interior_only() {
        let mut grid = solver_grid(5);
        grid.wrk2.fill(7.0);
        commit_pass(&mut grid);
        for i in 0..5 {
            for j in 0..5 {
                for k in 0..5 {
                    let idx = grid.cell_index(i, j, k);
                    let interior = (1..4).contains(&i) && (1..4).contains(&j) && (1..4).contains(&k);
                    if interior {
                        assert_eq!(grid.p[idx], 7.0);
                    } else {
                        assert_eq!(grid.p[idx], 0.0, "border ({},{},{}) overwritten", i, j, k);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_field_has_zero_residual() {
        // With p = wrk1 = 0 everywhere the stencil sum is zero, so the
        // residual and the new values are zero too.
        let mut grid = solver_grid(9);
        grid.p.fill(0.0);
        let gosa = relax_pass(&mut grid);
        assert_eq!(gosa, 0.0);
        assert!(grid.wrk2.iter().all(|&v| v == 0.0));
    }
}
