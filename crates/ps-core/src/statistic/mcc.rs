use ps_common::{MetricKind, PositiveLabel};

use super::{Direction, StatisticFunction};
use crate::contingency::ContingencyTable;
use crate::split::Split;

/// Matthews correlation coefficient.
///
/// Scores are binarized with `score < threshold → 0, else 1` and compared
/// against `label == 1`. This differs from [`super::Accuracy`] (which uses
/// `label >= 0` and counts NaN scores as wrong); the difference is
/// historical and intentionally kept.
#[derive(Debug, Clone, Copy)]
pub struct Mcc {
    positive: PositiveLabel,
}

impl Default for Mcc {
    fn default() -> Self {
        Self {
            positive: PositiveLabel::EqualsOne,
        }
    }
}

impl Mcc {
    pub fn with_positive_label(mut self, positive: PositiveLabel) -> Self {
        self.positive = positive;
        self
    }

    pub fn positive_label(&self) -> PositiveLabel {
        self.positive
    }
}

impl StatisticFunction for Mcc {
    fn kind(&self) -> MetricKind {
        MetricKind::Mcc
    }

    fn direction(&self) -> Direction {
        Direction::HigherIsBetter
    }

    fn chance_level(&self) -> f64 {
        0.0
    }

    fn evaluate(&self, threshold: f64, split: &Split<'_>) -> f64 {
        ContingencyTable::binarized(threshold, split, self.positive).matthews()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_separation() {
        let split = Split::new(&[0.9, 0.1, 0.8, 0.2], &[1.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(Mcc::default().evaluate(0.5, &split), 1.0);
    }

    #[test]
    fn inverted_separation() {
        let split = Split::new(&[0.1, 0.9, 0.2, 0.8], &[1.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(Mcc::default().evaluate(0.5, &split), -1.0);
    }

    #[test]
    fn single_class_predictions_are_zero() {
        let split = Split::new(&[0.9, 0.8], &[1.0, 0.0]).unwrap();
        // Every score above threshold: no predicted negatives.
        assert_eq!(Mcc::default().evaluate(0.5, &split), 0.0);
    }

    #[test]
    fn empty_split_is_zero() {
        let split = Split::new(&[], &[]).unwrap();
        assert_eq!(Mcc::default().evaluate(0.5, &split), 0.0);
    }

    #[test]
    fn minus_one_labels_are_negative() {
        let split = Split::new(&[0.9, 0.1], &[1.0, -1.0]).unwrap();
        assert_eq!(Mcc::default().evaluate(0.5, &split), 1.0);
    }
}
