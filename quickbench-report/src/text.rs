//! Text Output
//!
//! Terminal-friendly rendering of check and bench results:
//! - One `"<label> matches <reference>: True|False"` line per comparison.
//!   Derived `[i] name` labels are printed as-is; caller-supplied names are
//!   right-aligned to a shared width of at least [`MIN_NAME_WIDTH`]
//! - A bordered table for timings, columns sized to their widest cell

use quickbench_core::BenchResult;
use quickbench_logic::CheckResult;

/// Default number of decimals for seconds
pub const DEFAULT_PRECISION: usize = 6;

/// Minimum column width of caller-supplied names in check lines
pub const MIN_NAME_WIDTH: usize = 10;

const HEADERS: [&str; 3] = ["Functions", "Time (tot)", "Time (per iter)"];

/// Width of the label columns in check lines.
///
/// `named` is true when the labels are caller-supplied names. Derived labels
/// are never padded.
pub fn label_width<S: AsRef<str>>(labels: &[S], named: bool) -> usize {
    if !named {
        return 0;
    }
    labels
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH)
}

/// Render a boolean the way check lines show it
fn bool_word(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Format one comparison line (without trailing newline)
pub fn format_check_line(result: &CheckResult, width: usize) -> String {
    format!(
        "{:>width$} matches {:>width$}: {}",
        result.label,
        result.reference_label,
        bool_word(result.matches),
        width = width
    )
}

/// Format all comparison lines of a pass
pub fn format_check_lines(results: &[CheckResult], named: bool) -> String {
    let labels: Vec<&str> = results
        .iter()
        .flat_map(|r| [r.label.as_str(), r.reference_label.as_str()])
        .collect();
    let width = label_width(&labels, named);

    let mut output = String::new();
    for result in results {
        output.push_str(&format_check_line(result, width));
        output.push('\n');
    }
    output
}

/// Format seconds with a fixed number of decimals and an `s` suffix
pub fn format_seconds(secs: f64, precision: usize) -> String {
    format!("{:.prec$}s", secs, prec = precision)
}

/// Format timings as a bordered table
///
/// ```text
/// +-----------+------------+-----------------+
/// | Functions | Time (tot) | Time (per iter) |
/// +-----------+------------+-----------------+
/// |  [0] good |  0.058003s |       0.005800s |
/// +-----------+------------+-----------------+
/// ```
pub fn format_bench_table(results: &[BenchResult], precision: usize) -> String {
    let rows: Vec<[String; 3]> = results
        .iter()
        .map(|r| {
            [
                r.label.clone(),
                format_seconds(r.total_secs, precision),
                format_seconds(r.per_iteration_secs(), precision),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut output = String::new();
    output.push_str(&border);

    output.push('|');
    for (header, width) in HEADERS.iter().zip(widths) {
        output.push_str(&format!(" {:^width$} |", header, width = width));
    }
    output.push('\n');
    output.push_str(&border);

    for row in &rows {
        output.push('|');
        for (cell, width) in row.iter().zip(widths) {
            output.push_str(&format!(" {:>width$} |", cell, width = width));
        }
        output.push('\n');
    }
    output.push_str(&border);

    output
}
