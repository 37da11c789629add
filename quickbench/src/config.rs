//! Configuration loading from quickbench.toml
//!
//! Defaults for `check` and `bench` can be kept in a `quickbench.toml` file.
//! The file is discovered by walking up from the current directory.

use quickbench_core::DEFAULT_ITERATIONS;
use quickbench_report::{DEFAULT_PRECISION, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// File name looked up by [`QuickConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "quickbench.toml";

/// QuickBench configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QuickConfig {
    /// Benchmark defaults
    #[serde(default)]
    pub bench: BenchConfig,
    /// Check defaults
    #[serde(default)]
    pub check: CheckConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Benchmark defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Invocations per candidate
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    /// Skip printing the timing table
    #[serde(default)]
    pub quiet: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            quiet: false,
        }
    }
}

fn default_iterations() -> u64 {
    DEFAULT_ITERATIONS
}

/// Check defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Skip printing comparison lines
    #[serde(default)]
    pub quiet: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "human" or "json"
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimals shown for seconds
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "quickbench=info".to_string()
}

impl QuickConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for a configuration file
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        warn!(path = %config_path.display(), error = %e, "ignoring invalid config");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# QuickBench Configuration

[bench]
# Invocations per candidate
iterations = 10
# Skip printing the timing table
quiet = false

[check]
# Skip printing comparison lines
quiet = false

[output]
# Output format: human, json
format = "human"
# Decimals shown for seconds
precision = 6

[logging]
# tracing filter directive (RUST_LOG takes precedence)
filter = "quickbench=info"
"#
        .to_string()
    }
}
