//! High-level evaluation: pick the right search path for a statistic and
//! report the result with its dispersion across splits.

use ps_common::{MetricKind, Result, SCHEMA_VERSION};
use ps_config::EvaluationSection;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::search::{
    optimize_split, optimize_splits, standard_deviation, standard_error,
    threshold_independent_mean, OptimalStatistic,
};
use crate::split::Split;
use crate::statistic::{self, Direction, StatisticFunction};

/// Summary of one statistic evaluated over a set of splits.
///
/// Non-finite values (no splits, a NaN fold statistic, the unimproved search
/// seed) are reported as absent so the JSON form reads back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub schema_version: String,
    pub metric: MetricKind,
    /// Optimal (or, for threshold-independent metrics, mean) statistic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistic: Option<f64>,
    /// Threshold the statistic was reached at; absent when none applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Standard deviation (denominator n) across splits at `threshold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
    /// `std_dev / sqrt(splits)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_error: Option<f64>,
    /// What an uninformative predictor scores on this metric.
    pub chance_level: f64,
    pub splits: usize,
}

impl EvaluationReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Distance of the reported statistic from chance, signed so that a
    /// positive value is always an improvement.
    pub fn lift_over_chance(&self, direction: Direction) -> Option<f64> {
        let statistic = self.statistic?;
        Some(match direction {
            Direction::HigherIsBetter => statistic - self.chance_level,
            Direction::LowerIsBetter => self.chance_level - statistic,
        })
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Runs one statistic function over splits.
#[derive(Debug)]
pub struct Evaluator {
    statistic: Box<dyn StatisticFunction>,
}

impl Evaluator {
    pub fn new(statistic: Box<dyn StatisticFunction>) -> Self {
        Self { statistic }
    }

    pub fn for_kind(kind: MetricKind) -> Self {
        Self::new(statistic::for_kind(kind))
    }

    pub fn from_config(section: &EvaluationSection) -> Self {
        Self::new(statistic::from_config(section))
    }

    pub fn statistic(&self) -> &dyn StatisticFunction {
        self.statistic.as_ref()
    }

    /// Statistic for one split. Threshold-dependent metrics are optimized
    /// over the split's decision values; threshold-independent ones are
    /// evaluated directly.
    pub fn evaluate_split(&self, split: &Split<'_>) -> OptimalStatistic {
        if self.statistic.is_threshold_independent() {
            OptimalStatistic::without_threshold(self.statistic.evaluate(0.0, split))
        } else {
            optimize_split(self.statistic(), split)
        }
    }

    /// Statistic across splits. Threshold-dependent metrics share one
    /// optimized threshold; threshold-independent ones are averaged.
    pub fn evaluate_splits(&self, splits: &[Split<'_>]) -> OptimalStatistic {
        if self.statistic.is_threshold_independent() {
            OptimalStatistic::without_threshold(threshold_independent_mean(self.statistic(), splits))
        } else {
            optimize_splits(self.statistic(), splits)
        }
    }

    /// Full fold evaluation: search, then dispersion at the found threshold.
    pub fn evaluate_folds(&self, splits: &[Split<'_>]) -> EvaluationReport {
        let optimum = self.evaluate_splits(splits);
        let threshold = optimum.raw_threshold();
        let std_dev = standard_deviation(self.statistic(), threshold, splits);
        let std_error = standard_error(self.statistic(), threshold, splits);
        info!(
            metric = self.statistic.name(),
            statistic = optimum.statistic,
            threshold = threshold,
            std_dev = std_dev,
            std_error = std_error,
            splits = splits.len(),
            "evaluation complete"
        );
        EvaluationReport {
            schema_version: SCHEMA_VERSION.to_string(),
            metric: self.statistic.kind(),
            statistic: finite(optimum.statistic),
            threshold: optimum.threshold(),
            std_dev: finite(std_dev),
            std_error: finite(std_error),
            chance_level: self.statistic.chance_level(),
            splits: splits.len(),
        }
    }
}
