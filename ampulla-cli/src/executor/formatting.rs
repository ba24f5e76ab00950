//! Output Formatting
//!
//! Human-readable output for an experiment report. Lines appear in a fixed
//! order: actual and expected averages for measurement, major, minor and
//! depth; then the three surface-area aggregates. The timestamp is left out
//! so the text is identical for identical seeds.

use ampulla_report::{MetricPair, Report};

/// Format a report for human-readable terminal display
///
/// `tolerance_percent` decides the ✓/✗ marker next to each expected value.
pub fn format_human_output(report: &Report, tolerance_percent: f64) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Ampulla Neuroepithelium Simulation\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "samples: {}  seed: {}  major law: {}  depth law: {}\n\n",
        report.meta.samples, report.meta.seed, report.meta.major_law, report.meta.depth_law
    ));

    for metric in &report.metrics {
        push_metric(&mut output, metric, tolerance_percent);
    }

    let sa = &report.surface_area;
    output.push('\n');
    output.push_str(&format!("Average of All SAs: {:.4}\n", sa.mean_of_samples));
    output.push_str(&format!(
        "Average Using Average Major/Minor/Depth: {:.4}\n",
        sa.of_means
    ));
    output.push_str(&format!(
        "Average Using Expected Average Major/Minor/Depth: {:.4}\n",
        sa.of_expected
    ));
    output.push_str(&format!(
        "Aggregation bias (mean of SAs - SA of means): {:.4} ({:+.2}%)\n",
        sa.aggregation_bias, sa.relative_aggregation_bias
    ));

    if !report.distributions.is_empty() {
        output.push('\n');
        output.push_str("Distributions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "  {:<14} {:>12} {:>10} {:>10} {:>12} {:>12}\n",
            "column", "mean", "stddev", "stderr", "p5", "p95"
        ));
        for dist in &report.distributions {
            let s = &dist.summary;
            output.push_str(&format!(
                "  {:<14} {:>12.4} {:>10.4} {:>10.4} {:>12.4} {:>12.4}\n",
                dist.column,
                s.mean,
                s.std_dev,
                s.standard_error,
                s.percentiles.p5,
                s.percentiles.p95
            ));
        }
    }

    output
}

fn push_metric(output: &mut String, metric: &MetricPair, tolerance_percent: f64) {
    let label = capitalize(&metric.name);
    let icon = if metric.relative_deviation.abs() < tolerance_percent {
        "✓"
    } else {
        "✗"
    };
    output.push_str(&format!("Actual Average {}: {:.4}\n", label, metric.actual));
    output.push_str(&format!(
        "Expected Average {}: {:.4}  {} {:+.2}%\n",
        label, metric.expected, icon, metric.relative_deviation
    ));
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampulla_report::{ReportMeta, SCHEMA_VERSION, SurfaceAreaEstimates};
    use chrono::Utc;

    fn report() -> Report {
        Report {
            meta: ReportMeta {
                schema_version: SCHEMA_VERSION,
                version: "0.1.0".to_string(),
                timestamp: Utc::now(),
                samples: 1,
                seed: 5,
                major_law: "normal".to_string(),
                depth_law: "uniform".to_string(),
            },
            metrics: vec![
                MetricPair::new("measurement", 160.3, 160.2),
                MetricPair::new("major", 184.0, 184.06),
                MetricPair::new("minor", 140.0, 136.34),
                MetricPair::new("depth", 69.2, 69.3),
            ],
            surface_area: SurfaceAreaEstimates {
                mean_of_samples: 3.0,
                of_means: 2.0,
                of_expected: 1.0,
                aggregation_bias: 1.0,
                relative_aggregation_bias: 50.0,
            },
            distributions: Vec::new(),
        }
    }

    #[test]
    fn test_line_order() {
        let output = format_human_output(&report(), 1.0);
        let labels = [
            "Actual Average Measurement:",
            "Expected Average Measurement:",
            "Actual Average Major:",
            "Expected Average Major:",
            "Actual Average Minor:",
            "Expected Average Minor:",
            "Actual Average Depth:",
            "Expected Average Depth:",
            "Average of All SAs:",
            "Average Using Average Major/Minor/Depth:",
            "Average Using Expected Average Major/Minor/Depth:",
        ];

        let positions: Vec<usize> = labels
            .iter()
            .map(|label| output.find(label).unwrap_or_else(|| panic!("missing {label}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_values_and_markers() {
        let output = format_human_output(&report(), 1.0);
        assert!(output.contains("Actual Average Major: 184.0000\n"));
        assert!(output.contains("Average of All SAs: 3.0000\n"));
        assert!(output.contains("depth law: uniform"));
        // minor is 2.7% off, outside a 1% tolerance
        assert!(output.contains("Expected Average Minor: 136.3400  ✗"));
        assert!(output.contains("Expected Average Major: 184.0600  ✓"));
    }

    #[test]
    fn test_deterministic() {
        let mut later = report();
        later.meta.timestamp = Utc::now() + chrono::Duration::hours(1);
        assert_eq!(
            format_human_output(&report(), 1.0),
            format_human_output(&later, 1.0)
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("depth"), "Depth");
        assert_eq!(capitalize(""), "");
    }
}
