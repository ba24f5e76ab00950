//! Percentile Computation
//!
//! Percentiles are computed on a sorted copy; the caller's column keeps its
//! sample order.

use serde::{Deserialize, Serialize};

/// Percentiles reported for every sample column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    /// 5th percentile
    pub p5: f64,
    /// 25th percentile
    pub p25: f64,
    /// 50th percentile (median)
    pub p50: f64,
    /// 75th percentile
    pub p75: f64,
    /// 95th percentile
    pub p95: f64,
}

/// Compute a single percentile from samples
///
/// Uses linear interpolation between nearest ranks.
///
/// # Examples
///
/// ```
/// # use ampulla_stats::compute_percentile;
/// let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(compute_percentile(&samples, 50.0), 3.0);
/// ```
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    compute_percentile_sorted(&sorted_copy(samples), percentile)
}

/// Compute all reported percentiles with a single sort
pub fn compute_percentiles(samples: &[f64]) -> Percentiles {
    let sorted = sorted_copy(samples);
    Percentiles {
        p5: compute_percentile_sorted(&sorted, 5.0),
        p25: compute_percentile_sorted(&sorted, 25.0),
        p50: compute_percentile_sorted(&sorted, 50.0),
        p75: compute_percentile_sorted(&sorted, 75.0),
        p95: compute_percentile_sorted(&sorted, 95.0),
    }
}

fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

fn compute_percentile_sorted(sorted: &[f64], percentile: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let p = (percentile / 100.0).clamp(0.0, 1.0);
            let rank = p * (n - 1) as f64;
            let lower_idx = rank.floor() as usize;
            let upper_idx = (lower_idx + 1).min(n - 1);
            let fraction = rank - lower_idx as f64;

            sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
        }
    }
}
