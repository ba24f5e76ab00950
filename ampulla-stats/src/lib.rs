#![warn(missing_docs)]
//! Ampulla Statistical Engine
//!
//! Descriptive statistics for Monte Carlo sample columns:
//! - Arithmetic mean as a pure reduction over an immutable slice
//! - Sample standard deviation and standard error of the mean
//! - Percentiles by linear interpolation between nearest ranks
//! - Relative deviation of an observed aggregate from its expected value

mod percentiles;
mod summary;

pub use percentiles::{Percentiles, compute_percentile, compute_percentiles};
pub use summary::{SummaryStatistics, compute_summary, mean, relative_deviation};

/// Number of standard errors treated as "consistent with the expected mean"
pub const CONSISTENCY_BAND_SE: f64 = 4.0;

