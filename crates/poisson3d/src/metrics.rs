//! Throughput accounting and the end-of-run report.

use std::fmt;

use serde::Serialize;

use crate::config::GridSize;
use crate::constants::FLOP_PER_CELL;

/// Floating-point operations one iteration performs over the interior.
pub fn flop_per_iteration(size: GridSize) -> f64 {
    FLOP_PER_CELL * size.interior_cells() as f64
}

/// Throughput in MFLOPS for `iterations` sweeps taking `elapsed_secs`
/// seconds, where `flop` is the per-iteration operation count.
pub fn mflops(iterations: usize, elapsed_secs: f64, flop: f64) -> f64 {
    flop / elapsed_secs * 1e-6 * iterations as f64
}

/// Everything the reporting side needs about a finished run.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BenchReport {
    pub size: GridSize,
    pub iterations: usize,
    pub elapsed_secs: f64,
    /// Residual sum of the final iteration.
    pub residual: f64,
    pub mflops: f64,
}

impl BenchReport {
    pub fn new(size: GridSize, iterations: usize, elapsed_secs: f64, residual: f64) -> Self {
        let throughput = mflops(iterations, elapsed_secs, flop_per_iteration(size));
        Self { size, iterations, elapsed_secs, residual, mflops: throughput }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "grid       : {} x {} x {}",
            self.size.nx(),
            self.size.ny(),
            self.size.nz()
        )?;
        writeln!(f, "iterations : {}", self.iterations)?;
        writeln!(f, "residual   : {:e}", self.residual)?;
        writeln!(f, "elapsed    : {:.6} s", self.elapsed_secs)?;
        write!(f, "throughput : {:.3} MFLOPS", self.mflops)
    }
}
