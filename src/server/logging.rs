use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::config::ConfigError};

/// Installs the global `tracing` subscriber.
///
/// `LOG_LEVEL` accepts any `EnvFilter` directive, so `info` and
/// `quotebook=debug,sea_orm=warn` are both valid. Must be called once, before the first
/// log line is emitted.
pub fn init_tracing(config: &Config) -> Result<(), ConfigError> {
    let filter = build_filter(&config.log_level)?;

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(level.trim()).map_err(|e| ConfigError::InvalidEnvVar {
        name: "LOG_LEVEL".to_string(),
        value: level.to_string(),
        reason: e.to_string(),
    })
}
