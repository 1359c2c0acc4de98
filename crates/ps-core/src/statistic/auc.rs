use ps_common::{MetricKind, PositiveLabel};
use ps_config::AucAlgorithm;
use ps_math::rank_sum;
use tracing::warn;

use super::{Direction, StatisticFunction};
use crate::split::Split;

/// Area under the ROC curve, computed as the Mann–Whitney probability that a
/// positive example outscores a negative one (ties count one half).
///
/// Threshold-independent. Positive labels default to `label >= 0`.
///
/// NaN scores are not excluded: they stay in their label's bucket and so in
/// the denominator, but every comparison involving them is false, so they
/// add nothing to the numerator. A warning is logged when they occur. If
/// either bucket is empty the result is NaN.
#[derive(Debug, Clone, Copy)]
pub struct Auc {
    positive: PositiveLabel,
    algorithm: AucAlgorithm,
}

impl Default for Auc {
    fn default() -> Self {
        Self {
            positive: PositiveLabel::NonNegative,
            algorithm: AucAlgorithm::Pairwise,
        }
    }
}

impl Auc {
    pub fn with_positive_label(mut self, positive: PositiveLabel) -> Self {
        self.positive = positive;
        self
    }

    pub fn with_algorithm(mut self, algorithm: AucAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn algorithm(&self) -> AucAlgorithm {
        self.algorithm
    }

    /// AUC of one split.
    pub fn auc(&self, split: &Split<'_>) -> f64 {
        let nan_scores = split.nan_scores();
        if nan_scores > 0 {
            warn!(
                nan_scores,
                total = split.len(),
                "NaN found instead of a decision value; NaN is always interpreted as a wrong prediction"
            );
        }

        let (pairs_won, positives, negatives) = match self.algorithm {
            AucAlgorithm::Pairwise => self.pairwise(split),
            AucAlgorithm::Rank => self.ranked(split),
        };
        if positives == 0 || negatives == 0 {
            warn!(positives, negatives, "AUC undefined: one label class is empty");
        }
        pairs_won / positives as f64 / negatives as f64
    }

    fn pairwise(&self, split: &Split<'_>) -> (f64, usize, usize) {
        let (pos, neg): (Vec<(f64, f64)>, Vec<(f64, f64)>) = split
            .pairs()
            .partition(|&(_, label)| self.positive.is_positive(label));

        let mut sum = 0.0;
        for &(p, _) in &pos {
            for &(n, _) in &neg {
                if p > n {
                    sum += 1.0;
                } else if p == n {
                    sum += 0.5;
                }
            }
        }
        (sum, pos.len(), neg.len())
    }

    fn ranked(&self, split: &Split<'_>) -> (f64, usize, usize) {
        let mut positives = 0usize;
        let mut negatives = 0usize;
        let mut values = Vec::with_capacity(split.len());
        let mut is_positive = Vec::with_capacity(split.len());
        for (score, label) in split.pairs() {
            let positive = self.positive.is_positive(label);
            if positive {
                positives += 1;
            } else {
                negatives += 1;
            }
            // NaN wins no comparisons, so it is left out of the ranking.
            if !score.is_nan() {
                values.push(score);
                is_positive.push(positive);
            }
        }

        let ranked_positives = is_positive.iter().filter(|&&p| p).count() as f64;
        let u = rank_sum(&values, &is_positive) - ranked_positives * (ranked_positives + 1.0) / 2.0;
        (u, positives, negatives)
    }
}

impl StatisticFunction for Auc {
    fn kind(&self) -> MetricKind {
        MetricKind::Auc
    }

    fn direction(&self) -> Direction {
        Direction::HigherIsBetter
    }

    fn is_threshold_independent(&self) -> bool {
        true
    }

    fn chance_level(&self) -> f64 {
        0.5
    }

    fn evaluate(&self, _threshold: f64, split: &Split<'_>) -> f64 {
        self.auc(split)
    }
}
