//! Positive-class rules for binary labels.
//!
//! Labels arrive as `f64`. Which values count as the positive class is a
//! per-metric convention, and the conventions are not the same across
//! metrics: Accuracy and AUC historically treat any non-negative label as
//! positive (a `+1/-1` encoding), while MCC only accepts exactly `1`.
//! Each statistic function carries its own rule; they are never unified.

use serde::{Deserialize, Serialize};

/// Rule deciding whether a label denotes the positive class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositiveLabel {
    /// `label >= 0`. Default for Accuracy and AUC.
    NonNegative,
    /// `label == 1`. Default for MCC.
    EqualsOne,
    /// `label > 0`. Suits `1/0` encodings.
    GreaterThanZero,
}

impl PositiveLabel {
    /// Whether `label` is positive under this rule. NaN labels are never positive.
    #[inline]
    pub fn is_positive(self, label: f64) -> bool {
        match self {
            PositiveLabel::NonNegative => label >= 0.0,
            PositiveLabel::EqualsOne => label == 1.0,
            PositiveLabel::GreaterThanZero => label > 0.0,
        }
    }
}

impl std::fmt::Display for PositiveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositiveLabel::NonNegative => write!(f, "label >= 0"),
            PositiveLabel::EqualsOne => write!(f, "label == 1"),
            PositiveLabel::GreaterThanZero => write!(f, "label > 0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_label_depends_on_rule() {
        assert!(PositiveLabel::NonNegative.is_positive(0.0));
        assert!(!PositiveLabel::EqualsOne.is_positive(0.0));
        assert!(!PositiveLabel::GreaterThanZero.is_positive(0.0));
    }

    #[test]
    fn minus_one_is_negative_everywhere() {
        for rule in [
            PositiveLabel::NonNegative,
            PositiveLabel::EqualsOne,
            PositiveLabel::GreaterThanZero,
        ] {
            assert!(!rule.is_positive(-1.0), "{rule}");
            assert!(rule.is_positive(1.0), "{rule}");
            assert!(!rule.is_positive(f64::NAN), "{rule}");
        }
    }

    #[test]
    fn equals_one_rejects_other_positives() {
        assert!(!PositiveLabel::EqualsOne.is_positive(2.0));
        assert!(PositiveLabel::GreaterThanZero.is_positive(2.0));
    }
}
