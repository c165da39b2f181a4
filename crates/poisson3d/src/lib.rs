//! 3-D pressure Poisson relaxation benchmark core.
//!
//! Solves a discretized Poisson-type pressure equation on a structured 3-D
//! grid with a point-Jacobi scheme and reports the per-iteration residual.
//! The hot path is a 19-point stencil sweep plus a squared-residual
//! reduction, double-buffered between the live pressure field and a scratch
//! field and data-parallel over the grid interior.
//!
//! # Example
//!
//! ```
//! use poisson3d::{GridSize, JacobiSolver3D};
//!
//! let size = GridSize::new(17, 17, 17).unwrap();
//! let mut solver = JacobiSolver3D::new(size);
//! let residual = solver.run(10);
//! assert!(residual.is_finite());
//! ```

pub mod config;
pub mod constants;
pub mod grid;
pub mod init;
pub mod metrics;
pub mod stencil;
pub mod timer;

pub use config::{BenchConfig, ConfigError, GridSize};
pub use grid::Grid3D;
pub use metrics::BenchReport;
pub use timer::Timer;

/// Point-Jacobi relaxation solver over a fixed-size 3-D grid.
///
/// Owns all field storage; allocation happens once in [`JacobiSolver3D::new`]
/// and the arrays are never resized.
pub struct JacobiSolver3D {
    pub grid: Grid3D,
}

impl JacobiSolver3D {
    /// Allocate and initialize a solver for the given dimensions.
    pub fn new(size: GridSize) -> Self {
        let mut grid = Grid3D::new(size);
        init::initialize(&mut grid);
        Self { grid }
    }

    /// One full iteration: relax into the scratch field, then commit it back
    /// into the pressure field. Returns the iteration's residual sum.
    pub fn step(&mut self) -> f64 {
        let gosa = stencil::relax_pass(&mut self.grid);
        stencil::commit_pass(&mut self.grid);
        gosa
    }

    /// Run a fixed number of iterations and return the final residual.
    ///
    /// No convergence check is performed; the loop always runs exactly
    /// `iterations` times. A degenerate (NaN/Inf) residual propagates
    /// silently rather than stopping the run.
    pub fn run(&mut self, iterations: usize) -> f64 {
        let mut gosa = 0.0;
        for _ in 0..iterations {
            gosa = self.step();
        }
        gosa
    }

    /// Re-run the initializer on the existing storage, restoring the seeded
    /// starting state.
    pub fn reinitialize(&mut self) {
        init::initialize(&mut self.grid);
    }

    /// Grid dimensions this solver was built with.
    pub fn size(&self) -> GridSize {
        self.grid.size
    }
}
