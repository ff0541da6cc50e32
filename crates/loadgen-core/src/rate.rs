//! Operator-facing throughput arithmetic.
//!
//! Purely informational: the projection printed before a run. Actual pacing
//! is the engine's tick interval; nothing here throttles anything.

use std::fmt;
use std::time::Duration;

/// Projected throughput and duration for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSummary {
    /// Iterations started per second at the configured tick.
    pub iterations_per_second: f64,
    /// Projected total run time in minutes.
    pub estimated_total_minutes: f64,
}

impl fmt::Display for RateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}/s for {:.1}m",
            self.iterations_per_second, self.estimated_total_minutes
        )
    }
}

/// Relate iteration count and tick interval to a throughput projection.
///
/// Returns `None` for a zero tick interval, where the rate is bounded only
/// by sink latency and no meaningful projection exists.
pub fn describe(iteration_count: u64, tick_interval: Duration) -> Option<RateSummary> {
    if tick_interval.is_zero() {
        return None;
    }
    let iterations_per_second = 1.0 / tick_interval.as_secs_f64();
    let estimated_total_minutes = iteration_count as f64 / (iterations_per_second * 60.0);
    Some(RateSummary {
        iterations_per_second,
        estimated_total_minutes,
    })
}
