#![warn(missing_docs)]
//! QuickBench Logic - Correctness Checks
//!
//! Verifies that candidates agree with a reference candidate:
//! - `run_checks` drives one pass and reports each comparison as it completes
//! - Ready-made predicates (`exact`, `approx_eq`, `all_close`)
//! - `CheckSummary` aggregation

mod checker;
mod predicate;

pub use checker::{CheckResult, CheckSummary, MIN_CHECK_CANDIDATES, aggregate_checks, run_checks};
pub use predicate::{DEFAULT_ATOL, DEFAULT_RTOL, all_close, all_close_default, approx_eq, exact};
