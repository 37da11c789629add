//! Report Data Structures

use chrono::{DateTime, Utc};
use quickbench_core::BenchResult;
use quickbench_logic::{CheckResult, CheckSummary, aggregate_checks};
use serde::{Deserialize, Serialize};

/// Report schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Results of one check or bench pass, ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report metadata
    pub meta: ReportMeta,
    /// Comparison results, empty for bench reports
    pub checks: Vec<CheckResult>,
    /// Aggregate of `checks`, present for check reports
    pub check_summary: Option<CheckSummary>,
    /// Timings, empty for check reports
    pub benches: Vec<BenchResult>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Schema version ([`SCHEMA_VERSION`])
    pub schema_version: u32,
    /// QuickBench version that produced the report
    pub version: String,
    /// Generation time
    pub timestamp: DateTime<Utc>,
    /// Iterations per candidate, for bench reports
    pub iterations: Option<u64>,
}

impl ReportMeta {
    fn now(iterations: Option<u64>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            iterations,
        }
    }
}

impl Report {
    /// Report for a check pass
    pub fn for_checks(checks: &[CheckResult]) -> Self {
        Self {
            meta: ReportMeta::now(None),
            checks: checks.to_vec(),
            check_summary: Some(aggregate_checks(checks)),
            benches: Vec::new(),
        }
    }

    /// Report for a bench pass
    pub fn for_benches(benches: &[BenchResult]) -> Self {
        Self {
            meta: ReportMeta::now(benches.first().map(|b| b.iterations)),
            checks: Vec::new(),
            check_summary: None,
            benches: benches.to_vec(),
        }
    }
}
