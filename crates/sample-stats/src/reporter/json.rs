//! JSON reporter for comparison reports

use crate::analysis::ComparisonReport;
use anyhow::Result;

/// Serialises the full report, field for field.
pub struct JsonReporter;

impl JsonReporter {
    /// Render `report` as a single line, or indented when `pretty` is set.
    pub fn format(report: &ComparisonReport, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::test_support::create_test_report;

    #[test]
    fn test_json_single_line() {
        let report = create_test_report();
        let output = JsonReporter::format(&report, false).unwrap();

        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("\"label\":\"baseline\""));
    }

    #[test]
    fn test_json_indented() {
        let report = create_test_report();
        let output = JsonReporter::format(&report, true).unwrap();

        assert!(output.lines().count() > 10);
        assert!(output.contains("\n  \"verdict\": \"greater\""));
    }

    #[test]
    fn test_json_parses_back() {
        let report = create_test_report();
        let json = JsonReporter::format(&report, false).unwrap();
        let parsed: ComparisonReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.a.label, report.a.label);
        assert_eq!(parsed.b.label, report.b.label);
        assert_eq!(parsed.verdict, report.verdict);
        assert_eq!(parsed.a.summary.count, report.a.summary.count);
    }

    #[test]
    fn test_json_non_finite_as_strings() {
        let mut report = create_test_report();
        report.percentage_difference = f64::INFINITY;
        report.signed_percentage_difference = f64::NEG_INFINITY;

        let output = JsonReporter::format(&report, false).unwrap();
        assert!(output.contains("\"percentage_difference\":\"inf\""));
        assert!(output.contains("\"signed_percentage_difference\":\"-inf\""));

        let parsed: ComparisonReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.percentage_difference, f64::INFINITY);
        assert_eq!(parsed.signed_percentage_difference, f64::NEG_INFINITY);
    }
}
