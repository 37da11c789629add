#![warn(missing_docs)]
//! QuickBench Core - Candidates, Binding and Timing
//!
//! This crate provides the building blocks shared by checks and benchmarks:
//! - `ArgumentBundle` of named, type-erased argument values
//! - `Candidate` trait and the closure-backed `FnCandidate`
//! - `bind` to select the arguments a candidate declares
//! - `run_bench` timing loop with wall-clock measurement
//! - Display label resolution and the error taxonomy

mod args;
mod binder;
mod candidate;
mod error;
mod label;
mod measure;
mod timer;

pub use args::{ArgumentBundle, BoundArgs};
pub use binder::bind;
pub use candidate::{BoxedCandidate, Candidate, FnCandidate, boxed};
pub use error::{BindingError, BoxError, ConfigurationError, Error, Result};
pub use label::{ANONYMOUS_NAME, resolve_labels};
pub use measure::{Timer, as_secs};
pub use timer::{BenchResult, DEFAULT_ITERATIONS, run_bench, run_timed_loop};
