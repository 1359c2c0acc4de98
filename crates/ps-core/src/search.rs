//! Optimal-threshold search and cross-split aggregation.
//!
//! Every distinct observed decision value is a threshold candidate. The
//! statistic is evaluated at each candidate and the best one is kept
//! according to the function's [`Direction`].
//!
//! Tie-breaking differs between the two search paths and is part of the
//! contract:
//!
//! - [`optimize_split`] keeps the **last** candidate that reaches the
//!   optimum (non-strict `>=` / `<=`).
//! - [`optimize_splits`] keeps the **first** one (strict `>` / `<`).
//!
//! Candidates are visited in first-seen input order.

use std::collections::HashSet;

use tracing::debug;

use ps_math::MeanVariance;

use crate::split::Split;
use crate::statistic::{Direction, StatisticFunction};

/// Threshold reported when no candidate was available.
pub const NO_THRESHOLD: f64 = -1.0;

/// Which of several equally good candidates to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Strict comparison: the earliest optimal candidate stays.
    FirstWins,
    /// Non-strict comparison: each later optimal candidate replaces it.
    LastWins,
}

/// Result of a threshold search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalStatistic {
    /// Best statistic found, or the direction's worst seed when nothing was evaluated.
    pub statistic: f64,
    threshold: Option<f64>,
}

impl OptimalStatistic {
    /// Result carrying no threshold (empty search or threshold-independent metric).
    pub fn without_threshold(statistic: f64) -> Self {
        Self {
            statistic,
            threshold: None,
        }
    }

    /// Threshold that produced `statistic`, if any.
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Threshold, or [`NO_THRESHOLD`] (−1) when none was found.
    ///
    /// Callers must not read −1 as a real threshold; check
    /// [`threshold`](Self::threshold) when the distinction matters.
    pub fn raw_threshold(&self) -> f64 {
        self.threshold.unwrap_or(NO_THRESHOLD)
    }

    pub fn has_threshold(&self) -> bool {
        self.threshold.is_some()
    }
}

/// Distinct decision values across `score_sets`, in first-seen order.
///
/// Values are compared by bit pattern, so `0.0` and `-0.0` are separate
/// candidates and all NaNs collapse into one.
pub fn candidate_thresholds<'a, I>(score_sets: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for scores in score_sets {
        for &value in scores {
            let key = if value.is_nan() {
                f64::NAN.to_bits()
            } else {
                value.to_bits()
            };
            if seen.insert(key) {
                out.push(value);
            }
        }
    }
    out
}

/// Evaluate `evaluate` at each candidate and keep the optimum.
pub fn select_optimum<F>(
    candidates: &[f64],
    direction: Direction,
    tie_break: TieBreak,
    mut evaluate: F,
) -> OptimalStatistic
where
    F: FnMut(f64) -> f64,
{
    let mut best = OptimalStatistic::without_threshold(direction.worst());
    for &threshold in candidates {
        let value = evaluate(threshold);
        let better = match tie_break {
            TieBreak::FirstWins => direction.beats(value, best.statistic),
            TieBreak::LastWins => direction.matches_or_beats(value, best.statistic),
        };
        if better {
            best = OptimalStatistic {
                statistic: value,
                threshold: Some(threshold),
            };
        }
    }
    best
}

/// Best statistic over the distinct decision values of a single split.
///
/// Ties resolve to the last optimal candidate.
pub fn optimize_split(statistic: &dyn StatisticFunction, split: &Split<'_>) -> OptimalStatistic {
    let candidates = candidate_thresholds([split.scores()]);
    let result = select_optimum(
        &candidates,
        statistic.direction(),
        TieBreak::LastWins,
        |t| statistic.evaluate(t, split),
    );
    debug!(
        metric = statistic.name(),
        candidates = candidates.len(),
        statistic = result.statistic,
        threshold = result.raw_threshold(),
        "single-split threshold search"
    );
    result
}

/// Best mean statistic over the union of decision values from all splits.
///
/// At each candidate the statistic is evaluated on every split and averaged.
/// Ties resolve to the first optimal candidate.
pub fn optimize_splits(statistic: &dyn StatisticFunction, splits: &[Split<'_>]) -> OptimalStatistic {
    let candidates = candidate_thresholds(splits.iter().map(|s| s.scores()));
    let result = select_optimum(
        &candidates,
        statistic.direction(),
        TieBreak::FirstWins,
        |t| statistic.evaluate_splits(t, splits),
    );
    debug!(
        metric = statistic.name(),
        splits = splits.len(),
        candidates = candidates.len(),
        statistic = result.statistic,
        threshold = result.raw_threshold(),
        "multi-split threshold search"
    );
    result
}

/// Mean of a threshold-independent statistic across splits. NaN for no splits.
pub fn threshold_independent_mean(statistic: &dyn StatisticFunction, splits: &[Split<'_>]) -> f64 {
    statistic.evaluate_splits(NO_THRESHOLD, splits)
}

fn per_split(
    statistic: &dyn StatisticFunction,
    threshold: f64,
    splits: &[Split<'_>],
) -> MeanVariance {
    splits
        .iter()
        .map(|split| statistic.evaluate(threshold, split))
        .collect()
}

/// Standard deviation (denominator n) of the statistic across splits, each
/// evaluated at `threshold`.
///
/// Pass the threshold from a previous [`optimize_splits`] call (its
/// [`raw_threshold`](OptimalStatistic::raw_threshold)). Threshold-independent
/// statistics ignore it. NaN for no splits; exactly 0 for one split.
pub fn standard_deviation(
    statistic: &dyn StatisticFunction,
    threshold: f64,
    splits: &[Split<'_>],
) -> f64 {
    per_split(statistic, threshold, splits).std_dev()
}

/// Standard error of the mean: [`standard_deviation`] / sqrt(number of splits).
pub fn standard_error(statistic: &dyn StatisticFunction, threshold: f64, splits: &[Split<'_>]) -> f64 {
    per_split(statistic, threshold, splits).std_error()
}
