use ps_common::MetricKind;
use ps_config::RmseDirection;

use super::{Direction, StatisticFunction};
use crate::split::Split;

/// Root mean squared error between scores and labels. Threshold-independent.
///
/// NOTE: by default the direction is `HigherIsBetter`. That is the
/// historical setting and is kept so results remain comparable, even though
/// a lower RMSE is conventionally better. Use [`RmseDirection::LowerIsBetter`]
/// to opt into the conventional direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rmse {
    direction: RmseDirection,
}

impl Rmse {
    pub fn new(direction: RmseDirection) -> Self {
        Self { direction }
    }

    /// RMSE of one split; NaN when the split is empty.
    pub fn rmse(split: &Split<'_>) -> f64 {
        let sum_sq: f64 = split
            .pairs()
            .map(|(score, label)| {
                let err = score - label;
                err * err
            })
            .sum();
        (sum_sq / split.len() as f64).sqrt()
    }
}

impl StatisticFunction for Rmse {
    fn kind(&self) -> MetricKind {
        MetricKind::Rmse
    }

    fn direction(&self) -> Direction {
        match self.direction {
            RmseDirection::LegacyHigherIsBetter => Direction::HigherIsBetter,
            RmseDirection::LowerIsBetter => Direction::LowerIsBetter,
        }
    }

    fn is_threshold_independent(&self) -> bool {
        true
    }

    fn chance_level(&self) -> f64 {
        0.0
    }

    fn evaluate(&self, _threshold: f64, split: &Split<'_>) -> f64 {
        Self::rmse(split)
    }
}
