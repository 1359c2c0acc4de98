//! predstat core: prediction statistics and optimal-threshold search.
//!
//! Given decision values and true labels, this crate computes Accuracy,
//! Matthews correlation, ROC AUC, and RMSE, finds the decision threshold
//! that optimizes a statistic, and aggregates statistics across
//! evaluation splits (e.g. cross-validation folds).
//!
//! ```no_run
//! use ps_core::{optimize_split, standard_deviation, statistic::Mcc, Split};
//!
//! let split = Split::new(&[0.9, 0.1, 0.8, 0.2], &[1.0, 0.0, 1.0, 0.0])?;
//! let best = optimize_split(&Mcc::default(), &split);
//! let _spread = standard_deviation(&Mcc::default(), best.raw_threshold(), &[split]);
//! # Ok::<(), ps_common::Error>(())
//! ```

pub mod contingency;
pub mod evaluator;
pub mod logging;
pub mod search;
pub mod split;
pub mod statistic;

pub use contingency::ContingencyTable;
pub use evaluator::{EvaluationReport, Evaluator};
pub use search::{
    candidate_thresholds, optimize_split, optimize_splits, standard_deviation, standard_error,
    threshold_independent_mean, OptimalStatistic, TieBreak, NO_THRESHOLD,
};
pub use split::{splits_from_lists, Split};
pub use statistic::{Direction, StatisticFunction};
