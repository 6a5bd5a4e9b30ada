//! Console reporter for comparison reports
//!
//! Provides human-readable output with ASCII tables and a verdict line.

use anyhow::Result;
use std::fmt::Write;

use crate::analysis::{ComparisonReport, SampleReport};
use crate::inference::Comparison;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a comparison report for console output
    pub fn format(report: &ComparisonReport) -> Result<String> {
        let mut output = String::new();

        // Header
        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                    COMPARISON RESULTS                        ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        // Samples table
        writeln!(output, "  ┌────────────┬─────────┬─────────┬─────────┬─────────┬─────────┬─────────┐")?;
        writeln!(output, "  │ Sample     │  Count  │   Min   │   P50   │  Mean   │   Max   │ StdDev  │")?;
        writeln!(output, "  ├────────────┼─────────┼─────────┼─────────┼─────────┼─────────┼─────────┤")?;
        Self::format_sample_row(&mut output, &report.a)?;
        Self::format_sample_row(&mut output, &report.b)?;
        writeln!(output, "  └────────────┴─────────┴─────────┴─────────┴─────────┴─────────┴─────────┘")?;
        writeln!(output)?;

        for side in [&report.a, &report.b] {
            if let Some(stats) = &side.outliers {
                writeln!(
                    output,
                    "  {}: {} of {} values removed as outliers ({:.2}%)",
                    side.label, stats.outliers_removed, stats.original_count, stats.outlier_percentage
                )?;
            }
        }

        // Welch's t-test
        writeln!(output, "Welch's t-test (alpha = {}):", report.test.alpha)?;
        writeln!(output, "  t statistic:         {:.4}", report.test.t_statistic)?;
        writeln!(output, "  Degrees of freedom:  {:.2}", report.test.degrees_of_freedom)?;
        writeln!(output, "  Critical value:      {:.4}", report.test.critical_value)?;
        writeln!(output, "  Difference:          {:+.2}%", report.signed_percentage_difference)?;
        writeln!(output)?;

        // Verdict
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        let symbol = if report.is_significant() { "✓" } else { "=" };
        writeln!(output, "Verdict: {} {}", symbol, Self::verdict_sentence(report))?;
        writeln!(output)?;

        Ok(output)
    }

    fn format_sample_row(output: &mut String, side: &SampleReport) -> Result<()> {
        let summary = &side.summary;
        writeln!(
            output,
            "  │ {:<10} │ {:>7} │ {:>7.2} │ {:>7.2} │ {:>7.2} │ {:>7.2} │ {:>7.2} │",
            truncate(&side.label, 10),
            summary.count,
            summary.min,
            summary.p50,
            summary.mean,
            summary.max,
            summary.std_dev
        )?;
        Ok(())
    }

    fn verdict_sentence(report: &ComparisonReport) -> String {
        match report.verdict {
            Comparison::Greater => {
                format!("{} is significantly greater than {}", report.a.label, report.b.label)
            }
            Comparison::Less => {
                format!("{} is significantly less than {}", report.a.label, report.b.label)
            }
            Comparison::Equal => format!(
                "no significant difference between {} and {}",
                report.a.label, report.b.label
            ),
        }
    }
}

fn truncate(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(width - 1).collect();
        short.push('…');
        short
    }
}
