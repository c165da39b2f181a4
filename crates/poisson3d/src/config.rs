//! Run configuration: grid dimensions and iteration count.
//!
//! Dimensions are supplied once at startup and fixed for the process
//! lifetime. Every loop bound in the solver derives from [`GridSize`], so the
//! same binary can run any size without recompilation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors detected before any grid storage is allocated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An axis is too short to contain any interior cell.
    #[error("grid axis '{axis}' must be at least 3 cells, got {len}")]
    AxisTooSmall { axis: char, len: usize },

    /// The benchmark loop must run at least once.
    #[error("iteration count must be positive")]
    ZeroIterations,
}

/// Grid dimensions, including the one-cell border on every face.
///
/// The interior (the cells the stencil actually updates) is `[1, n-2]` on
/// each axis, so every axis must be at least 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GridSize {
    /// Validate and build a grid size. Each axis must be >= 3.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, ConfigError> {
        for (axis, len) in [('x', nx), ('y', ny), ('z', nz)] {
            if len < 3 {
                return Err(ConfigError::AxisTooSmall { axis, len });
            }
        }
        Ok(Self { nx, ny, nz })
    }

    /// 33 x 33 x 65 grid.
    pub fn tiny() -> Self {
        Self { nx: 33, ny: 33, nz: 65 }
    }

    /// 65 x 65 x 129 grid.
    pub fn small() -> Self {
        Self { nx: 65, ny: 65, nz: 129 }
    }

    /// 129 x 129 x 257 grid.
    pub fn medium() -> Self {
        Self { nx: 129, ny: 129, nz: 257 }
    }

    /// 257 x 257 x 513 grid.
    pub fn large() -> Self {
        Self { nx: 257, ny: 257, nz: 513 }
    }

    /// 513 x 513 x 1025 grid.
    pub fn extra_large() -> Self {
        Self { nx: 513, ny: 513, nz: 1025 }
    }

    /// Cells along the X axis.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Cells along the Y axis.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Cells along the Z axis.
    #[inline]
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Total cell count, borders included.
    #[inline]
    pub fn cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Number of cells the stencil updates each iteration.
    #[inline]
    pub fn interior_cells(&self) -> usize {
        (self.nx - 2) * (self.ny - 2) * (self.nz - 2)
    }
}

/// A complete benchmark run description: grid size plus iteration count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub size: GridSize,
    pub iterations: usize,
}

impl BenchConfig {
    /// Validate and build a run configuration.
    pub fn new(size: GridSize, iterations: usize) -> Result<Self, ConfigError> {
        if iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(Self { size, iterations })
    }
}
