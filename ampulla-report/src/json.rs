//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_json_round_trip_keeps_values() {
        let report = sample_report();
        let json = generate_json_report(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.meta.seed, report.meta.seed);
        assert_eq!(parsed.metrics.len(), 4);
        let (a, b) = (&parsed.surface_area, &report.surface_area);
        assert!((a.mean_of_samples - b.mean_of_samples).abs() < 1e-9);
        assert!((a.relative_aggregation_bias - b.relative_aggregation_bias).abs() < 1e-9);
    }

    #[test]
    fn test_json_field_names() {
        let json = generate_json_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metrics"][0]["name"], "measurement");
        assert!(value["surface_area"]["mean_of_samples"].is_number());
        assert!(value["meta"]["timestamp"].is_string());
    }
}
