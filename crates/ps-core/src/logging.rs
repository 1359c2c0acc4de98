//! Structured logging setup.
//!
//! Filter precedence: `PREDSTAT_LOG`, then `RUST_LOG`, then the configured
//! level. Output is human-readable or JSON lines per `LoggingConfig::json`.

use ps_common::{Error, Result};
use ps_config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a predstat-specific filter directive.
pub const LOG_ENV_VAR: &str = "PREDSTAT_LOG";

/// Build the env filter for `config`.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::Config(format!("invalid log level '{}': {e}", config.level)))
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` if a global subscriber was already installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry();
    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_filter(filter))
            .try_init()
            .is_ok()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_filter(filter))
            .try_init()
            .is_ok()
    };
    Ok(installed)
}
