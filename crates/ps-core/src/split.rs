//! Evaluation splits: matched decision values and labels.

use ps_common::{Error, Result};

/// One evaluation run's decision values and true labels, e.g. one
/// cross-validation fold. Both slices always have the same length.
#[derive(Debug, Clone, Copy)]
pub struct Split<'a> {
    scores: &'a [f64],
    labels: &'a [f64],
}

impl<'a> Split<'a> {
    /// Pair decision values with labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] when the slices differ in length.
    pub fn new(scores: &'a [f64], labels: &'a [f64]) -> Result<Self> {
        if scores.len() != labels.len() {
            return Err(Error::LengthMismatch {
                scores: scores.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { scores, labels })
    }

    pub fn scores(&self) -> &'a [f64] {
        self.scores
    }

    pub fn labels(&self) -> &'a [f64] {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// `(score, label)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        let (scores, labels) = (self.scores, self.labels);
        scores.iter().copied().zip(labels.iter().copied())
    }

    /// Number of NaN decision values.
    pub fn nan_scores(&self) -> usize {
        self.scores.iter().filter(|s| s.is_nan()).count()
    }
}

/// Build aligned splits from parallel per-split lists.
///
/// Element `i` of `decisions` and element `i` of `labels` belong to split `i`.
///
/// # Errors
///
/// [`Error::SplitCountMismatch`] when the lists differ in length, or
/// [`Error::InvalidSplit`] naming the first split whose arrays differ.
pub fn splits_from_lists<'a, D, L>(decisions: &'a [D], labels: &'a [L]) -> Result<Vec<Split<'a>>>
where
    D: AsRef<[f64]>,
    L: AsRef<[f64]>,
{
    if decisions.len() != labels.len() {
        return Err(Error::SplitCountMismatch {
            decisions: decisions.len(),
            labels: labels.len(),
        });
    }
    decisions
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (d, l))| Split::new(d.as_ref(), l.as_ref()).map_err(|e| e.in_split(i)))
        .collect()
}
