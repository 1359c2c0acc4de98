//! Contingency tables (TP/TN/FN/FP) from thresholded decision values.
//!
//! Two binarization conventions exist and both are kept:
//!
//! - [`ContingencyTable::at_threshold`]: `score >= threshold` predicts
//!   positive. A NaN score is always counted as a wrong prediction (FN for a
//!   positive label, FP for a negative one). Used by Accuracy.
//! - [`ContingencyTable::binarized`]: `score < threshold` predicts negative,
//!   everything else positive. NaN fails the `<` test and therefore predicts
//!   positive. Used by MCC.

use ps_common::PositiveLabel;

use crate::split::Split;

/// Prediction counts at one threshold. `total()` always equals the split length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContingencyTable {
    pub true_positive: u64,
    pub true_negative: u64,
    pub false_negative: u64,
    pub false_positive: u64,
}

impl ContingencyTable {
    /// Count outcomes predicting positive when `score >= threshold`.
    pub fn at_threshold(threshold: f64, split: &Split<'_>, positive: PositiveLabel) -> Self {
        let mut table = Self::default();
        for (score, label) in split.pairs() {
            let actual = positive.is_positive(label);
            if score.is_nan() {
                table.record_wrong(actual);
            } else {
                table.record(score >= threshold, actual);
            }
        }
        table
    }

    /// Count outcomes after mapping `score < threshold` to 0 and everything
    /// else to 1.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn binarized(threshold: f64, split: &Split<'_>, positive: PositiveLabel) -> Self {
        let mut table = Self::default();
        for (score, label) in split.pairs() {
            // Not `>=`: NaN must land on the positive side.
            let predicted = !(score < threshold);
            table.record(predicted, positive.is_positive(label));
        }
        table
    }

    fn record(&mut self, predicted: bool, actual: bool) {
        match (predicted, actual) {
            (true, true) => self.true_positive += 1,
            (false, false) => self.true_negative += 1,
            (false, true) => self.false_negative += 1,
            (true, false) => self.false_positive += 1,
        }
    }

    fn record_wrong(&mut self, actual: bool) {
        if actual {
            self.false_negative += 1;
        } else {
            self.false_positive += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.true_positive + self.true_negative + self.false_negative + self.false_positive
    }

    pub fn correct(&self) -> u64 {
        self.true_positive + self.true_negative
    }

    /// (TP+TN)/total, or 0 for an empty table.
    pub fn accuracy(&self) -> f64 {
        let value = self.correct() as f64 / self.total() as f64;
        if value.is_nan() {
            0.0
        } else {
            value
        }
    }

    /// Matthews correlation coefficient, or 0 when any marginal is empty.
    pub fn matthews(&self) -> f64 {
        let tp = self.true_positive as f64;
        let tn = self.true_negative as f64;
        let fn_ = self.false_negative as f64;
        let fp = self.false_positive as f64;
        let value = (tp * tn - fp * fn_) / ((tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_)).sqrt();
        if value.is_nan() {
            0.0
        } else {
            value
        }
    }
}
