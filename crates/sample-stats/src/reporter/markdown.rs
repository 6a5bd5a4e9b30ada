//! Markdown reporter for comparison reports

use anyhow::Result;
use std::fmt::Write;

use crate::analysis::ComparisonReport;

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Format a comparison report as a Markdown document
    pub fn format(report: &ComparisonReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# {} vs {}", report.a.label, report.b.label)?;
        writeln!(output)?;

        writeln!(output, "## Samples")?;
        writeln!(output)?;
        writeln!(output, "| Sample | Count | Min | P25 | P50 | P75 | Max | Mean | StdDev | Outliers |")?;
        writeln!(output, "|--------|------:|----:|----:|----:|----:|----:|-----:|-------:|---------:|")?;
        for side in [&report.a, &report.b] {
            let s = &side.summary;
            let outliers = side
                .outliers
                .map(|o| o.outliers_removed.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                output,
                "| {} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {} |",
                side.label, s.count, s.min, s.p25, s.p50, s.p75, s.max, s.mean, s.std_dev, outliers
            )?;
        }
        writeln!(output)?;

        writeln!(output, "## Welch's t-test")?;
        writeln!(output)?;
        writeln!(output, "| Statistic | Value |")?;
        writeln!(output, "|-----------|------:|")?;
        writeln!(output, "| alpha | {} |", report.test.alpha)?;
        writeln!(output, "| t | {:.4} |", report.test.t_statistic)?;
        writeln!(output, "| df | {:.2} |", report.test.degrees_of_freedom)?;
        writeln!(output, "| critical value | {:.4} |", report.test.critical_value)?;
        writeln!(output, "| difference | {:+.2}% |", report.signed_percentage_difference)?;
        writeln!(output)?;

        writeln!(output, "**Verdict:** `{}`", report.verdict)?;

        Ok(output)
    }
}
