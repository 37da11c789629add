#![warn(missing_docs)]
//! QuickBench Report - Rendering
//!
//! Generates output for check and bench passes:
//! - Human-readable text (aligned check lines, bordered timing table)
//! - JSON (machine-readable)

mod json;
mod report;
mod text;

pub use json::generate_json_report;
pub use report::{Report, ReportMeta, SCHEMA_VERSION};
pub use text::{
    DEFAULT_PRECISION, MIN_NAME_WIDTH, format_bench_table, format_check_line, format_check_lines,
    format_seconds, label_width,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// JSON with full schema
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
