//! Check and Bench Passes
//!
//! Glue between the checker/timer and the renderers. Every pass validates
//! its options before running any candidate, and writes to the output stream
//! in call order.

use crate::options::{BenchOptions, CheckOptions};
use quickbench_core::{ArgumentBundle, BenchResult, Candidate, Error, Result, run_bench};
use quickbench_logic::{CheckResult, aggregate_checks, run_checks};
use quickbench_report::{
    OutputFormat, Report, format_bench_table, format_check_line, generate_json_report,
    label_width,
};
use std::io::Write;
use tracing::info;

/// Check candidates against the first one, printing to stdout.
///
/// ```ignore
/// let results = quickbench::check(&mut funcs, &args, all_close_default(), &CheckOptions::default())?;
/// ```
pub fn check<C, P>(
    candidates: &mut [C],
    args: &ArgumentBundle,
    compfunc: P,
    options: &CheckOptions,
) -> Result<Vec<CheckResult>>
where
    C: Candidate,
    P: FnMut(&C::Output, &C::Output) -> bool,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    check_to(&mut out, candidates, args, compfunc, options)
}

/// Check candidates against the first one, writing to `out`.
///
/// In human format each comparison line is written as soon as it is known;
/// a failure part-way leaves the completed lines in place. JSON is written
/// once the pass succeeds.
pub fn check_to<W, C, P>(
    out: &mut W,
    candidates: &mut [C],
    args: &ArgumentBundle,
    compfunc: P,
    options: &CheckOptions,
) -> Result<Vec<CheckResult>>
where
    W: Write,
    C: Candidate,
    P: FnMut(&C::Output, &C::Output) -> bool,
{
    let print_lines = !options.quiet && options.format == OutputFormat::Human;
    let named = options.names.is_some();

    let results = run_checks(
        candidates,
        args,
        compfunc,
        options.names.as_deref(),
        |result, labels| {
            if print_lines {
                writeln!(out, "{}", format_check_line(result, label_width(labels, named)))?;
            }
            Ok(())
        },
    )?;

    let summary = aggregate_checks(&results);
    info!(
        total = summary.total,
        matched = summary.matched,
        mismatched = summary.mismatched,
        "check complete"
    );

    if !options.quiet && options.format == OutputFormat::Json {
        write_json(out, &Report::for_checks(&results))?;
    }
    out.flush()?;

    Ok(results)
}

/// Time candidates and print the table to stdout.
pub fn bench<C>(
    candidates: &mut [C],
    args: &ArgumentBundle,
    options: &BenchOptions,
) -> Result<Vec<BenchResult>>
where
    C: Candidate,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    bench_to(&mut out, candidates, args, options)
}

/// Time candidates and write the table to `out`.
///
/// Nothing is written unless every candidate completes.
pub fn bench_to<W, C>(
    out: &mut W,
    candidates: &mut [C],
    args: &ArgumentBundle,
    options: &BenchOptions,
) -> Result<Vec<BenchResult>>
where
    W: Write,
    C: Candidate,
{
    let results = measure(candidates, args, options)?;

    if !options.quiet {
        match options.format {
            OutputFormat::Human => {
                out.write_all(format_bench_table(&results, options.precision).as_bytes())?;
            }
            OutputFormat::Json => write_json(out, &Report::for_benches(&results))?,
        }
        out.flush()?;
    }

    Ok(results)
}

/// Time candidates without printing anything.
pub fn measure<C>(
    candidates: &mut [C],
    args: &ArgumentBundle,
    options: &BenchOptions,
) -> Result<Vec<BenchResult>>
where
    C: Candidate,
{
    let results = run_bench(
        candidates,
        args,
        options.iterations,
        options.names.as_deref(),
    )?;

    let total_secs: f64 = results.iter().map(|r| r.total_secs).sum();
    info!(
        candidates = results.len(),
        iterations = options.iterations,
        total_secs,
        "bench complete"
    );

    Ok(results)
}

fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    let json = generate_json_report(report).map_err(|e| Error::Json(e.to_string()))?;
    writeln!(out, "{}", json)?;
    Ok(())
}
