//! Wall-Clock Timing
//!
//! Thin wrapper over `std::time::Instant`. A pass reads the clock once before
//! and once after a candidate's iteration loop, never per call.

use std::time::Duration;

/// Running wall-clock timer
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: std::time::Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    /// Elapsed time since `start`
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Duration in floating-point seconds
#[inline]
pub fn as_secs(duration: Duration) -> f64 {
    duration.as_secs_f64()
}
