//! Evaluation section: which statistic to compute and how.

use ps_common::{MetricKind, PositiveLabel};
use serde::{Deserialize, Serialize};

/// Algorithm used to compute the area under the ROC curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AucAlgorithm {
    /// Compare every positive score with every negative score. O(P·N).
    #[default]
    Pairwise,
    /// Mann–Whitney U from average ranks. O(n log n), same result.
    Rank,
}

/// Optimization direction applied to RMSE.
///
/// RMSE historically carried a "higher is better" flag. That is kept as the
/// default so existing result tables stay comparable; `LowerIsBetter` must be
/// selected explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RmseDirection {
    #[default]
    LegacyHigherIsBetter,
    LowerIsBetter,
}

/// `[evaluation]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationSection {
    /// Statistic to compute.
    pub metric: MetricKind,

    pub auc_algorithm: AucAlgorithm,

    pub rmse_direction: RmseDirection,

    /// Overrides the metric's own positive-label rule when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_label: Option<PositiveLabel>,
}

impl Default for EvaluationSection {
    fn default() -> Self {
        Self {
            metric: MetricKind::Mcc,
            auc_algorithm: AucAlgorithm::default(),
            rmse_direction: RmseDirection::default(),
            positive_label: None,
        }
    }
}
