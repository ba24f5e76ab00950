#![warn(missing_docs)]
//! Ampulla Report - Structured Results and Output Formats
//!
//! A [`Report`] carries every aggregate of a run as plain data so tests and
//! tools can inspect values directly. Output formats:
//! - JSON (machine-readable)
//! - Human-readable text (rendered by the CLI)

mod json;
mod report;

pub use json::generate_json_report;
pub use report::{
    DistributionSummary, METRIC_DEPTH, METRIC_MAJOR, METRIC_MEASUREMENT, METRIC_MINOR, MetricPair,
    Report, ReportMeta, SCHEMA_VERSION, SurfaceAreaEstimates,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
