//! Wall-clock timing for benchmark runs.

use std::time::Instant;

/// Explicit stopwatch around [`Instant`]. Constructing it captures the
/// reference point; [`Timer::elapsed_secs`] can be read any number of times.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    started: Instant,
}

impl Timer {
    /// Capture the reference time point.
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    /// Seconds since [`Timer::start`], as a float.
    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}
