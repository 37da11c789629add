//! Timer - The Benchmark Loop
//!
//! Runs every candidate a fixed number of times under identical arguments
//! and records the wall-clock cost of the whole loop.

use crate::args::{ArgumentBundle, BoundArgs};
use crate::binder::bind;
use crate::candidate::Candidate;
use crate::error::{BoxError, ConfigurationError, Error, Result};
use crate::label::resolve_labels;
use crate::measure::{Timer, as_secs};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default number of iterations per candidate
pub const DEFAULT_ITERATIONS: u64 = 10;

/// Timing of one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
    /// Display label
    pub label: String,
    /// Wall-clock time of the whole loop, in seconds
    pub total_secs: f64,
    /// Number of invocations timed (always >= 1)
    pub iterations: u64,
}

impl BenchResult {
    /// Cost of one invocation, in seconds
    pub fn per_iteration_secs(&self) -> f64 {
        self.total_secs / self.iterations as f64
    }

    /// Total time as a `Duration`, `None` if `total_secs` is negative or not finite
    pub fn total(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.total_secs).ok()
    }
}

/// Invoke a candidate `iterations` times and return the elapsed time.
///
/// The clock is read once around the loop so timer overhead is not charged
/// per call. Results go through `black_box` so the work is not optimized out.
#[inline]
pub fn run_timed_loop<C>(
    candidate: &mut C,
    args: &BoundArgs<'_>,
    iterations: u64,
) -> std::result::Result<Duration, BoxError>
where
    C: Candidate + ?Sized,
{
    let timer = Timer::start();
    for _ in 0..iterations {
        std::hint::black_box(candidate.invoke(std::hint::black_box(args))?);
    }
    Ok(timer.stop())
}

/// Time each candidate in order.
///
/// Options are validated before anything runs. A failing candidate aborts
/// the remaining measurements; no result is returned for it.
pub fn run_bench<C>(
    candidates: &mut [C],
    bundle: &ArgumentBundle,
    iterations: u64,
    names: Option<&[String]>,
) -> Result<Vec<BenchResult>>
where
    C: Candidate,
{
    if candidates.is_empty() {
        return Err(ConfigurationError::NoCandidates.into());
    }
    if iterations == 0 {
        return Err(ConfigurationError::ZeroIterations.into());
    }
    let labels = resolve_labels(candidates, names)?;

    let mut results = Vec::with_capacity(candidates.len());
    for (candidate, label) in candidates.iter_mut().zip(labels) {
        let bound = bind(&*candidate, bundle).map_err(|e| e.with_label(&label))?;
        let elapsed = run_timed_loop(candidate, &bound, iterations)
            .map_err(|e| Error::from_candidate(&label, e))?;

        debug!(candidate = %label, iterations, elapsed_ns = elapsed.as_nanos() as u64, "timed");

        results.push(BenchResult {
            label,
            total_secs: as_secs(elapsed),
            iterations,
        });
    }

    Ok(results)
}
