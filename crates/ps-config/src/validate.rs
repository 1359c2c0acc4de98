//! Semantic validation beyond what serde enforces.

use ps_common::MetricKind;

use crate::logging::LOG_LEVELS;
use crate::{Config, ConfigError};

/// Check a parsed configuration for values serde accepts but predstat cannot use.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Invalid {
            field: "logging.level",
            reason: format!(
                "unknown level '{}' (expected one of {})",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.evaluation.metric == MetricKind::Rmse && config.evaluation.positive_label.is_some() {
        return Err(ConfigError::Invalid {
            field: "evaluation.positive_label",
            reason: "rmse compares scores to labels directly and has no positive class".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_common::PositiveLabel;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn level_is_case_insensitive() {
        let mut config = Config::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn rejects_unknown_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "logging.level", .. }));
    }

    #[test]
    fn rejects_positive_label_for_rmse() {
        let mut config = Config::default();
        config.evaluation.metric = MetricKind::Rmse;
        config.evaluation.positive_label = Some(PositiveLabel::GreaterThanZero);
        assert!(validate(&config).is_err());

        config.evaluation.metric = MetricKind::Auc;
        assert!(validate(&config).is_ok());
    }
}
