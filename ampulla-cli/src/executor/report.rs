//! Report Building
//!
//! ```text
//! SimulationRun
//!      │
//!      ├──> Aggregates ──> MetricPair x4 + SurfaceAreaEstimates
//!      │
//!      └──> columns ────> DistributionSummary x5
//! ```

use ampulla_core::SimulationRun;
use ampulla_report::{
    DistributionSummary, METRIC_DEPTH, METRIC_MAJOR, METRIC_MEASUREMENT, METRIC_MINOR, MetricPair,
    Report, ReportMeta, SCHEMA_VERSION, SurfaceAreaEstimates,
};
use chrono::Utc;

/// Build a complete Report from a finished run
///
/// Metrics appear in report order: measurement, major, minor, depth.
pub fn build_report(run: &SimulationRun) -> Report {
    let aggregates = run.aggregates();
    let expected = aggregates.expected;

    let metrics = vec![
        MetricPair::new(
            METRIC_MEASUREMENT,
            aggregates.mean_measurement,
            expected.measurement_midpoint(),
        ),
        MetricPair::new(METRIC_MAJOR, aggregates.mean_major, expected.major),
        MetricPair::new(METRIC_MINOR, aggregates.mean_minor, expected.minor),
        MetricPair::new(METRIC_DEPTH, aggregates.mean_depth, expected.depth),
    ];

    let surface_area = SurfaceAreaEstimates {
        mean_of_samples: aggregates.mean_surface_area,
        of_means: aggregates.surface_area_of_means,
        of_expected: aggregates.surface_area_of_expected,
        aggregation_bias: aggregates.aggregation_bias(),
        relative_aggregation_bias: aggregates.relative_aggregation_bias() * 100.0,
    };

    let distributions = run
        .distributions()
        .into_iter()
        .map(|(column, summary)| DistributionSummary {
            column: column.label().to_string(),
            summary,
        })
        .collect();

    Report {
        meta: ReportMeta {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            samples: aggregates.samples,
            seed: aggregates.seed,
            major_law: run.major_law().to_string(),
            depth_law: run.depth_law().to_string(),
        },
        metrics,
        surface_area,
        distributions,
    }
}
