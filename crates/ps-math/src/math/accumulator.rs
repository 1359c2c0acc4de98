//! Streaming mean/variance accumulation.
//!
//! `MeanVariance` uses Welford's update so observations can be fed one at a
//! time without keeping them around, while staying numerically stable when
//! the values are large and close together (typical for per-fold AUCs).

/// Welford mean/variance accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanVariance {
    count: u64,
    mean: f64,
    /// Sum of squared deviations from the running mean.
    m2: f64,
}

impl MeanVariance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation.
    pub fn observe(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Number of observations seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Arithmetic mean, NaN when nothing has been observed.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        self.mean
    }

    /// Variance with denominator `n`. NaN when empty or when any observation
    /// was NaN.
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        let variance = self.m2 / self.count as f64;
        // Rounding can leave a tiny negative m2; NaN must pass through.
        if variance < 0.0 {
            0.0
        } else {
            variance
        }
    }

    /// Standard deviation with denominator `n`.
    ///
    /// This is the dispersion reported across evaluation splits: a single
    /// observation yields exactly 0.
    pub fn std_dev(&self) -> f64 {
        self.population_variance().sqrt()
    }

    /// Standard error of the mean: `std_dev / sqrt(n)`.
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        self.std_dev() / (self.count as f64).sqrt()
    }
}

impl Extend<f64> for MeanVariance {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.observe(value);
        }
    }
}

impl FromIterator<f64> for MeanVariance {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = MeanVariance::new();
        acc.extend(iter);
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    fn two_pass_std(values: &[f64]) -> f64 {
        let m = mean(values);
        let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
        (ss / values.len() as f64).sqrt()
    }

    #[test]
    fn empty_accumulator_is_nan() {
        let acc = MeanVariance::new();
        assert_eq!(acc.count(), 0);
        assert!(acc.mean().is_nan());
        assert!(acc.std_dev().is_nan());
        assert!(acc.std_error().is_nan());
    }

    #[test]
    fn single_observation_has_zero_spread() {
        let acc: MeanVariance = [0.731].into_iter().collect();
        assert_eq!(acc.mean(), 0.731);
        assert_eq!(acc.std_dev(), 0.0);
        assert_eq!(acc.std_error(), 0.0);
    }

    #[test]
    fn known_values() {
        // Population std of 2,4,4,4,5,5,7,9 is exactly 2.
        let acc: MeanVariance = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        assert!(approx_eq(acc.mean(), 5.0, 1e-12));
        assert!(approx_eq(acc.std_dev(), 2.0, 1e-12));
        assert!(approx_eq(acc.std_error(), 2.0 / 8f64.sqrt(), 1e-12));
    }

    #[test]
    fn stable_with_large_offset() {
        let base = 1e9;
        let acc: MeanVariance = [base + 4.0, base + 7.0, base + 13.0, base + 16.0]
            .into_iter()
            .collect();
        assert!(approx_eq(acc.population_variance(), 22.5, 1e-6));
    }

    #[test]
    fn nan_observation_propagates_to_spread() {
        let acc: MeanVariance = [0.8, f64::NAN, 0.6].into_iter().collect();
        assert_eq!(acc.count(), 3);
        assert!(acc.mean().is_nan());
        assert!(acc.population_variance().is_nan());
        assert!(acc.std_dev().is_nan());
        assert!(acc.std_error().is_nan());
    }

    #[test]
    fn single_nan_observation_is_not_zero_spread() {
        let acc: MeanVariance = [f64::NAN].into_iter().collect();
        assert!(acc.std_dev().is_nan());
    }

    proptest! {
        #[test]
        fn matches_two_pass(values in prop::collection::vec(-1.0e3f64..1.0e3, 1..64)) {
            let acc: MeanVariance = values.iter().copied().collect();
            prop_assert!(approx_eq(acc.mean(), mean(&values), 1e-9));
            prop_assert!(approx_eq(acc.std_dev(), two_pass_std(&values), 1e-7));
            prop_assert!(acc.std_dev() >= 0.0);
        }
    }
}
