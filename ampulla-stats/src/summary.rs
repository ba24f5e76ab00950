//! Summary Statistics
//!
//! Every aggregate here is a pure reduction over an immutable column. Empty
//! columns yield zeros rather than NaN so a degenerate run still reports.

use crate::percentiles::{Percentiles, compute_percentiles};
use serde::{Deserialize, Serialize};

/// Descriptive statistics for one sample column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    /// Standard error of the mean
    pub standard_error: f64,
    /// Smallest observed value
    pub min: f64,
    /// Largest observed value
    pub max: f64,
    /// Spread percentiles
    pub percentiles: Percentiles,
    /// Number of samples in the column
    pub sample_count: usize,
}

/// Arithmetic mean of a column, `0.0` when empty
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Relative deviation of `actual` from `expected`, in percent
///
/// Returns `0.0` when `expected` is zero.
pub fn relative_deviation(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        0.0
    } else {
        (actual - expected) / expected * 100.0
    }
}

fn sample_std_dev(samples: &[f64], mean: f64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}

/// Compute summary statistics for a column
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    let mean = mean(samples);
    let std_dev = sample_std_dev(samples, mean);
    let standard_error = if samples.len() < 2 {
        0.0
    } else {
        std_dev / (samples.len() as f64).sqrt()
    };

    let min = samples.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let max = samples.iter().copied().reduce(f64::max).unwrap_or(0.0);

    SummaryStatistics {
        mean,
        std_dev,
        standard_error,
        min,
        max,
        percentiles: compute_percentiles(samples),
        sample_count: samples.len(),
    }
}

impl SummaryStatistics {
    /// Whether `expected` lies within `band` standard errors of the mean
    pub fn is_consistent_with(&self, expected: f64, band: f64) -> bool {
        (self.mean - expected).abs() <= band * self.standard_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = compute_summary(&samples);

        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert!((summary.percentiles.p50 - 3.0).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.sample_count, 5);
        // variance = 10 / 4
        assert!((summary.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
        assert!((summary.standard_error - (2.5f64 / 5.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mean_matches_summary() {
        let samples = vec![184.06, 136.34, 69.3];
        assert_eq!(mean(&samples), compute_summary(&samples).mean);
    }

    #[test]
    fn test_single_sample() {
        let summary = compute_summary(&[42.0]);

        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.standard_error, 0.0);
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.max, 42.0);
    }

    #[test]
    fn test_empty_samples() {
        let samples: Vec<f64> = Vec::new();
        let summary = compute_summary(&samples);

        assert_eq!(summary.sample_count, 0);
        assert!((summary.mean - 0.0).abs() < f64::EPSILON);
        assert_eq!(mean(&samples), 0.0);
        assert_eq!(summary.standard_error, 0.0);
    }

    #[test]
    fn test_relative_deviation() {
        assert!((relative_deviation(101.0, 100.0) - 1.0).abs() < 1e-12);
        assert!((relative_deviation(99.0, 100.0) + 1.0).abs() < 1e-12);
        assert_eq!(relative_deviation(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_consistency_band() {
        let samples = vec![9.0, 10.0, 11.0, 10.0];
        let summary = compute_summary(&samples);

        assert!(summary.is_consistent_with(10.0, 1.0));
        assert!(!summary.is_consistent_with(20.0, 4.0));
    }
}
