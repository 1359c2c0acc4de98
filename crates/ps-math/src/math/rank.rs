//! Average ranking of real values.
//!
//! Ranks are 1-based; tied values share the mean of the ranks they span.
//! Ties are decided by `==`, so `0.0` and `-0.0` tie while NaN never ties
//! with anything (NaNs are ordered after every other value).

use std::cmp::Ordering;

fn nan_last(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Assign average ranks to `values`.
///
/// Returns a vector of the same length where element `i` is the rank of
/// `values[i]`. Empty input produces empty output.
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| nan_last(values[a], values[b]));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // Positions i..j hold 1-based ranks (i+1)..=j.
        let rank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = rank;
        }
        i = j;
    }
    ranks
}

/// Sum of the average ranks of the entries flagged in `mask`.
///
/// Ranks are computed over all of `values`, then summed for the selected
/// subset. This is the `R` term of the Mann–Whitney U statistic.
pub fn rank_sum(values: &[f64], mask: &[bool]) -> f64 {
    average_ranks(values)
        .iter()
        .zip(mask)
        .filter(|(_, &selected)| selected)
        .map(|(rank, _)| rank)
        .sum()
}
