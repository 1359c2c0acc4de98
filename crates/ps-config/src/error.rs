//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse failure.
    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// JSON parse failure.
    #[error("failed to parse JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File extension is neither `.toml` nor `.json`.
    #[error("unsupported config format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    /// Semantic validation failed.
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<ConfigError> for ps_common::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io { source, .. } => ps_common::Error::Io(source),
            other => ps_common::Error::Config(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_maps_to_config_code() {
        let err = ConfigError::Invalid {
            field: "logging.level",
            reason: "unknown level 'loud'".to_string(),
        };
        let common: ps_common::Error = err.into();
        assert_eq!(common.code(), 20);
        assert!(common.to_string().contains("logging.level"));
    }

    #[test]
    fn io_keeps_io_code() {
        let err = ConfigError::Io {
            path: PathBuf::from("/nope.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let common: ps_common::Error = err.into();
        assert_eq!(common.code(), 60);
    }
}
