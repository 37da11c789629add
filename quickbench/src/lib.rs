#![warn(missing_docs)]
//! # QuickBench
//!
//! Check that several implementations of the same computation agree, then
//! time them side by side.
//!
//! - **Named arguments**: one `ArgumentBundle` is shared by every candidate;
//!   each candidate receives only the arguments it declares
//! - **Correctness checks**: every candidate is compared to the first one
//!   with a predicate of your choice (`exact`, `all_close`, any closure)
//! - **Timing**: each candidate runs a fixed number of iterations, reported
//!   as total and per-iteration wall-clock time
//! - **Reports**: aligned text lines and a bordered table, or JSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use quickbench::prelude::*;
//!
//! #[candidate]
//! fn left(a: &i64, b: &i64) -> i64 { a + b }
//!
//! #[candidate]
//! fn right(a: &i64, b: &i64) -> i64 { b + a }
//!
//! let args = args! { "a" => 1_i64, "b" => 2_i64 };
//! let mut funcs = candidates![left_candidate(), right_candidate()];
//!
//! quickbench::check(&mut funcs, &args, exact, &CheckOptions::default())?;
//! // [1] right matches [0] left: True
//!
//! quickbench::bench(&mut funcs, &args, &BenchOptions::default())?;
//! ```
//!
//! ## Closures
//!
//! ```ignore
//! let mut funcs = candidates![
//!     FnCandidate::new(&["a", "b"], |args| Ok(args.get::<i64>("a")? * 2)).named("double"),
//!     FnCandidate::new(&[], |_| Ok(2)),
//! ];
//! ```

mod config;
mod logging;
mod options;
mod pass;

pub use config::{
    BenchConfig, CONFIG_FILE_NAME, CheckConfig, LoggingConfig, OutputConfig, QuickConfig,
};
pub use logging::init_logging;
pub use options::{BenchOptions, CheckOptions};
pub use pass::{bench, bench_to, check, check_to, measure};

// Re-export core types
pub use quickbench_core::{
    ANONYMOUS_NAME, ArgumentBundle, BenchResult, BindingError, BoundArgs, BoxError,
    BoxedCandidate, Candidate, ConfigurationError, DEFAULT_ITERATIONS, Error, FnCandidate, Result,
    args, bind, boxed, candidates, resolve_labels,
};

// Re-export check types
pub use quickbench_logic::{
    CheckResult, CheckSummary, DEFAULT_ATOL, DEFAULT_RTOL, aggregate_checks, all_close,
    all_close_default, approx_eq, exact,
};

// Re-export rendering
pub use quickbench_report::{
    DEFAULT_PRECISION, MIN_NAME_WIDTH, OutputFormat, Report, format_bench_table,
    format_check_lines, generate_json_report,
};

// Re-export macros
pub use quickbench_macros::candidate;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ArgumentBundle, BenchOptions, BoundArgs, Candidate, CheckOptions, FnCandidate, all_close,
        all_close_default, approx_eq, args, candidate, candidates, exact,
    };
}
