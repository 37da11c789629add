//! Pass Options
//!
//! Enumerated settings for `check` and `bench`, seeded from defaults or a
//! [`QuickConfig`].

use crate::config::QuickConfig;
use quickbench_core::DEFAULT_ITERATIONS;
use quickbench_report::{DEFAULT_PRECISION, OutputFormat};

/// Settings for a check pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOptions {
    /// Display names, one per candidate
    pub names: Option<Vec<String>>,
    /// Skip printing
    pub quiet: bool,
    /// Output format
    pub format: OutputFormat,
}

impl CheckOptions {
    /// Options seeded from a configuration
    pub fn from_config(config: &QuickConfig) -> Self {
        Self {
            names: None,
            quiet: config.check.quiet,
            format: config.output.format,
        }
    }

    /// Set display names
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Suppress output
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Select output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Settings for a bench pass
#[derive(Debug, Clone, PartialEq)]
pub struct BenchOptions {
    /// Invocations per candidate, must be positive
    pub iterations: u64,
    /// Display names, one per candidate
    pub names: Option<Vec<String>>,
    /// Skip printing
    pub quiet: bool,
    /// Output format
    pub format: OutputFormat,
    /// Decimals shown for seconds
    pub precision: usize,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            names: None,
            quiet: false,
            format: OutputFormat::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl BenchOptions {
    /// Options seeded from a configuration
    pub fn from_config(config: &QuickConfig) -> Self {
        Self {
            iterations: config.bench.iterations,
            names: None,
            quiet: config.bench.quiet,
            format: config.output.format,
            precision: config.output.precision,
        }
    }

    /// Set the iteration count
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set display names
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Suppress output
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Select output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Decimals shown for seconds
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_defaults() {
        let options = BenchOptions::default();
        assert_eq!(options.iterations, 10);
        assert_eq!(options.precision, 6);
        assert!(options.names.is_none());
    }

    #[test]
    fn test_builders() {
        let options = BenchOptions::default()
            .iterations(5)
            .names(["a", "b"])
            .quiet();
        assert_eq!(options.iterations, 5);
        assert_eq!(options.names, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(options.quiet);
    }

    #[test]
    fn test_from_config() {
        let mut config = QuickConfig::default();
        config.bench.iterations = 3;
        config.check.quiet = true;
        config.output.format = OutputFormat::Json;

        let bench = BenchOptions::from_config(&config);
        assert_eq!(bench.iterations, 3);
        assert_eq!(bench.format, OutputFormat::Json);

        let check = CheckOptions::from_config(&config);
        assert!(check.quiet);
    }
}
