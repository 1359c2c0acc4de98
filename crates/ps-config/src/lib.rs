//! predstat configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the evaluation and logging sections
//! - Config resolution (explicit path → env → XDG → defaults)
//! - Semantic validation

pub mod error;
pub mod evaluation;
pub mod logging;
pub mod resolve;
pub mod validate;

pub use error::ConfigError;
pub use evaluation::{AucAlgorithm, EvaluationSection, RmseDirection};
pub use logging::LoggingConfig;
pub use resolve::{
    load_config, resolve_config, ConfigPaths, ConfigSource, ResolvedConfig, CONFIG_ENV_VAR,
};
pub use validate::validate;

use serde::{Deserialize, Serialize};

/// Complete predstat configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub evaluation: EvaluationSection,
    pub logging: LoggingConfig,
}
