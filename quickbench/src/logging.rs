//! Logging setup

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter when it parses. Fails if a
/// global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}

fn build_filter(env: Option<&str>, config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    if let Some(filter) = env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(&config.filter)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn config(filter: &str) -> LoggingConfig {
        LoggingConfig {
            filter: filter.to_string(),
        }
    }

    #[test]
    fn test_env_overrides_config() {
        let filter = build_filter(Some("quickbench=trace"), &config("quickbench=info")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_invalid_env_falls_back_to_config() {
        let filter = build_filter(Some("quickbench=loud"), &config("quickbench=warn")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_invalid_config_filter_is_an_error() {
        assert!(build_filter(None, &config("quickbench=loud")).is_err());
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default();
        init_logging(&config).unwrap();
        assert!(init_logging(&config).is_err());
    }
}
