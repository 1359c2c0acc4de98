use ps_common::{MetricKind, PositiveLabel};

use super::{Direction, StatisticFunction};
use crate::contingency::ContingencyTable;
use crate::split::Split;

/// Fraction of correct predictions, `score >= threshold` predicting positive.
///
/// Positive labels default to `label >= 0`. NaN scores are counted as wrong.
#[derive(Debug, Clone, Copy)]
pub struct Accuracy {
    positive: PositiveLabel,
}

impl Default for Accuracy {
    fn default() -> Self {
        Self {
            positive: PositiveLabel::NonNegative,
        }
    }
}

impl Accuracy {
    pub fn with_positive_label(mut self, positive: PositiveLabel) -> Self {
        self.positive = positive;
        self
    }

    pub fn positive_label(&self) -> PositiveLabel {
        self.positive
    }
}

impl StatisticFunction for Accuracy {
    fn kind(&self) -> MetricKind {
        MetricKind::Accuracy
    }

    fn direction(&self) -> Direction {
        Direction::HigherIsBetter
    }

    /// Assumes balanced classes; with prevalence `p` a constant predictor
    /// scores `max(p, 1 - p)`, so compare against that for skewed splits.
    fn chance_level(&self) -> f64 {
        0.5
    }

    fn evaluate(&self, threshold: f64, split: &Split<'_>) -> f64 {
        ContingencyTable::at_threshold(threshold, split, self.positive).accuracy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separable_split_is_perfect_at_midpoint() {
        let split = Split::new(&[0.9, 0.1, 0.8, 0.2], &[1.0, -1.0, 1.0, -1.0]).unwrap();
        assert_eq!(Accuracy::default().evaluate(0.5, &split), 1.0);
    }

    #[test]
    fn zero_one_labels_need_greater_than_zero_rule() {
        let split = Split::new(&[0.9, 0.1, 0.8, 0.2], &[1.0, 0.0, 1.0, 0.0]).unwrap();
        // Under `label >= 0` every example is positive.
        assert_eq!(Accuracy::default().evaluate(0.5, &split), 0.5);
        let acc = Accuracy::default().with_positive_label(PositiveLabel::GreaterThanZero);
        assert_eq!(acc.evaluate(0.5, &split), 1.0);
    }

    #[test]
    fn empty_split_is_zero() {
        let split = Split::new(&[], &[]).unwrap();
        assert_eq!(Accuracy::default().evaluate(0.5, &split), 0.0);
    }

    #[test]
    fn nan_scores_count_against_accuracy() {
        let split = Split::new(&[0.9, f64::NAN], &[1.0, -1.0]).unwrap();
        assert_eq!(Accuracy::default().evaluate(0.5, &split), 0.5);
    }
}
