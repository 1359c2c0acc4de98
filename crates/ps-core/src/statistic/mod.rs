//! Pluggable statistic functions.
//!
//! A statistic function maps `(threshold, split)` to a scalar. The threshold
//! search engine in [`crate::search`] treats every function the same way;
//! metric-specific conventions (positive-label rule, binarization, AUC
//! algorithm, RMSE direction) live inside each implementation.

mod accuracy;
mod auc;
mod mcc;
mod rmse;

pub use accuracy::Accuracy;
pub use auc::Auc;
pub use mcc::Mcc;
pub use rmse::Rmse;

use ps_common::MetricKind;
use ps_config::EvaluationSection;

use crate::split::Split;

/// Which end of a statistic's range is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    /// Seed value that every real statistic improves on.
    pub fn worst(self) -> f64 {
        match self {
            Direction::HigherIsBetter => f64::NEG_INFINITY,
            Direction::LowerIsBetter => f64::INFINITY,
        }
    }

    /// `candidate` strictly beats `best`.
    pub fn beats(self, candidate: f64, best: f64) -> bool {
        match self {
            Direction::HigherIsBetter => candidate > best,
            Direction::LowerIsBetter => candidate < best,
        }
    }

    /// `candidate` beats or ties `best`. NaN never matches.
    pub fn matches_or_beats(self, candidate: f64, best: f64) -> bool {
        match self {
            Direction::HigherIsBetter => candidate >= best,
            Direction::LowerIsBetter => candidate <= best,
        }
    }
}

/// A performance statistic evaluated at a decision threshold.
pub trait StatisticFunction: std::fmt::Debug + Send + Sync {
    /// Metric this function computes.
    fn kind(&self) -> MetricKind;

    /// Short display name, e.g. `"mcc"`.
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn direction(&self) -> Direction;

    /// True when `evaluate` ignores its threshold argument.
    fn is_threshold_independent(&self) -> bool {
        false
    }

    /// Value an uninformative predictor is expected to score.
    fn chance_level(&self) -> f64;

    /// Statistic for one split at `threshold`.
    fn evaluate(&self, threshold: f64, split: &Split<'_>) -> f64;

    /// Arithmetic mean of [`evaluate`](Self::evaluate) over `splits`, each
    /// split using the same threshold. NaN for no splits.
    fn evaluate_splits(&self, threshold: f64, splits: &[Split<'_>]) -> f64 {
        let sum: f64 = splits.iter().map(|s| self.evaluate(threshold, s)).sum();
        sum / splits.len() as f64
    }
}

/// Default-configured statistic function for `kind`.
pub fn for_kind(kind: MetricKind) -> Box<dyn StatisticFunction> {
    match kind {
        MetricKind::Accuracy => Box::new(Accuracy::default()),
        MetricKind::Mcc => Box::new(Mcc::default()),
        MetricKind::Auc => Box::new(Auc::default()),
        MetricKind::Rmse => Box::new(Rmse::default()),
    }
}

/// Statistic function described by an `[evaluation]` config section.
pub fn from_config(section: &EvaluationSection) -> Box<dyn StatisticFunction> {
    match section.metric {
        MetricKind::Accuracy => {
            let mut stat = Accuracy::default();
            if let Some(rule) = section.positive_label {
                stat = stat.with_positive_label(rule);
            }
            Box::new(stat)
        }
        MetricKind::Mcc => {
            let mut stat = Mcc::default();
            if let Some(rule) = section.positive_label {
                stat = stat.with_positive_label(rule);
            }
            Box::new(stat)
        }
        MetricKind::Auc => {
            let mut stat = Auc::default().with_algorithm(section.auc_algorithm);
            if let Some(rule) = section.positive_label {
                stat = stat.with_positive_label(rule);
            }
            Box::new(stat)
        }
        MetricKind::Rmse => Box::new(Rmse::new(section.rmse_direction)),
    }
}
