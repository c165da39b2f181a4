//! Numeric constants of the relaxation scheme.

/// Relaxation factor applied to each cell's correction. Fixed by the scheme,
/// never configurable.
pub const OMEGA: f32 = 0.8;

/// Value of the normalization coefficient (component 3 of set A) in the
/// initialized grid: the reciprocal of the six axial stencil weights.
pub const STENCIL_NORM: f32 = 1.0 / 6.0;

/// Components in coefficient set A (three positive axial weights plus the
/// normalization term).
pub const A_COMPONENTS: usize = 4;

/// Components in coefficient set B (cross-derivative weights).
pub const B_COMPONENTS: usize = 3;

/// Components in coefficient set C (negative axial weights).
pub const C_COMPONENTS: usize = 3;

/// Floating-point operations per interior cell per iteration, the figure the
/// throughput metric is based on.
pub const FLOP_PER_CELL: f64 = 34.0;
