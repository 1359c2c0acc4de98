//! Metric identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The statistic functions predstat knows how to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Fraction of correct predictions at a threshold.
    Accuracy,
    /// Matthews correlation coefficient at a threshold.
    Mcc,
    /// Area under the ROC curve (threshold-independent).
    Auc,
    /// Root mean squared error (threshold-independent).
    Rmse,
}

impl MetricKind {
    /// All metrics, in display order.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Accuracy,
        MetricKind::Mcc,
        MetricKind::Auc,
        MetricKind::Rmse,
    ];

    /// Stable lowercase name used in configuration and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Accuracy => "accuracy",
            MetricKind::Mcc => "mcc",
            MetricKind::Auc => "auc",
            MetricKind::Rmse => "rmse",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accuracy" | "acc" => Ok(MetricKind::Accuracy),
            "mcc" | "matthews" => Ok(MetricKind::Mcc),
            "auc" | "roc_auc" => Ok(MetricKind::Auc),
            "rmse" => Ok(MetricKind::Rmse),
            other => Err(Error::UnknownMetric(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_names_and_aliases() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.as_str().parse::<MetricKind>().unwrap(), kind);
        }
        assert_eq!("ACC".parse::<MetricKind>().unwrap(), MetricKind::Accuracy);
        assert_eq!(" roc_auc ".parse::<MetricKind>().unwrap(), MetricKind::Auc);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "f1".parse::<MetricKind>().unwrap_err();
        assert_eq!(err.code(), 21);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&MetricKind::Mcc).unwrap();
        assert_eq!(json, "\"mcc\"");
        let back: MetricKind = serde_json::from_str("\"rmse\"").unwrap();
        assert_eq!(back, MetricKind::Rmse);
    }
}
