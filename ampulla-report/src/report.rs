//! Report Data Structures

use ampulla_stats::{SummaryStatistics, relative_deviation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current report schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Metric name for the average measurement
pub const METRIC_MEASUREMENT: &str = "measurement";
/// Metric name for the average major axis
pub const METRIC_MAJOR: &str = "major";
/// Metric name for the average minor axis
pub const METRIC_MINOR: &str = "minor";
/// Metric name for the average depth
pub const METRIC_DEPTH: &str = "depth";

/// Complete experiment report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// Actual vs expected averages: measurement, major, minor, depth
    pub metrics: Vec<MetricPair>,
    /// The three surface-area aggregates
    pub surface_area: SurfaceAreaEstimates,
    /// Per-column descriptive statistics
    pub distributions: Vec<DistributionSummary>,
}

impl Report {
    /// Look up a metric by name
    pub fn metric(&self, name: &str) -> Option<&MetricPair> {
        self.metrics.iter().find(|m| m.name == name)
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Report schema version
    pub schema_version: u32,
    /// Tool version
    pub version: String,
    /// When the report was built
    pub timestamp: DateTime<Utc>,
    /// Number of samples
    pub samples: usize,
    /// Seed the run was drawn with
    pub seed: u64,
    /// Major axis sampling law
    pub major_law: String,
    /// Depth axis sampling law
    pub depth_law: String,
}

/// One simulated average next to its literature value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPair {
    /// Metric name
    pub name: String,
    /// Simulated average
    pub actual: f64,
    /// Expected (literature) average
    pub expected: f64,
    /// `(actual - expected) / expected`, percent
    pub relative_deviation: f64,
}

impl MetricPair {
    /// Pair `actual` with `expected`
    pub fn new(name: impl Into<String>, actual: f64, expected: f64) -> Self {
        Self {
            name: name.into(),
            actual,
            expected,
            relative_deviation: relative_deviation(actual, expected),
        }
    }
}

/// Exposed surface-area aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceAreaEstimates {
    /// Mean of per-sample areas
    pub mean_of_samples: f64,
    /// Area of the mean axes
    pub of_means: f64,
    /// Area of the expected axes
    pub of_expected: f64,
    /// `mean_of_samples - of_means`
    pub aggregation_bias: f64,
    /// Aggregation bias relative to `of_means`, percent
    pub relative_aggregation_bias: f64,
}

/// Descriptive statistics of one sample column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Column label
    pub column: String,
    /// Statistics
    pub summary: SummaryStatistics,
}
