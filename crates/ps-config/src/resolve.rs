//! Config resolution: explicit path → `PREDSTAT_CONFIG` → XDG → defaults.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{validate, Config, ConfigError};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "PREDSTAT_CONFIG";

/// Candidate config locations, in priority order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub explicit: Option<PathBuf>,
    pub env: Option<PathBuf>,
    pub xdg: Option<PathBuf>,
}

impl ConfigPaths {
    /// Collect candidates from the explicit argument, the environment, and
    /// the user's config directory.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            env: std::env::var_os(CONFIG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            xdg: dirs::config_dir().map(|d| d.join("predstat").join("config.toml")),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ConfigSource {
    Explicit(PathBuf),
    Env(PathBuf),
    Xdg(PathBuf),
    Defaults,
}

/// Configuration plus provenance.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Load and validate a config file, choosing the parser by extension.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let config: Config = match ext.as_deref() {
        Some("toml") => toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        Some("json") => serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };
    validate(&config)?;
    Ok(config)
}

/// Resolve the effective configuration from the candidate paths.
///
/// Explicit and env paths must exist; the XDG path is optional and skipped
/// when absent.
pub fn resolve_config(paths: &ConfigPaths) -> Result<ResolvedConfig, ConfigError> {
    if let Some(path) = &paths.explicit {
        return Ok(ResolvedConfig {
            config: load_config(path)?,
            source: ConfigSource::Explicit(path.clone()),
        });
    }
    if let Some(path) = &paths.env {
        return Ok(ResolvedConfig {
            config: load_config(path)?,
            source: ConfigSource::Env(path.clone()),
        });
    }
    if let Some(path) = paths.xdg.as_ref().filter(|p| p.is_file()) {
        return Ok(ResolvedConfig {
            config: load_config(path)?,
            source: ConfigSource::Xdg(path.clone()),
        });
    }
    Ok(ResolvedConfig {
        config: Config::default(),
        source: ConfigSource::Defaults,
    })
}
