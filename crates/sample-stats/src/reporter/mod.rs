//! Comparison report rendering
//!
//! This module formats a [`ComparisonReport`] for humans or machines.
//!
//! # Output Formats
//!
//! - **JSON**: Machine-readable format for CI/CD integration
//! - **Console**: Human-readable format with tables and a verdict line
//! - **Markdown**: Documentation-friendly format for reports
//!
//! Non-finite test statistics and differences (for example the infinite
//! `t` of two constant samples) are written as the strings `"inf"`, `"-inf"`
//! and `"NaN"` in JSON, so a saved report parses back unchanged.
//!
//! # Example
//!
//! ```no_run
//! use sample_stats::analysis::compare_samples;
//! use sample_stats::config::AnalysisConfig;
//! use sample_stats::reporter::{OutputFormat, Reporter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AnalysisConfig::default();
//! let report = compare_samples(&[10.0, 11.0, 12.0], &[1.0, 2.0, 3.0], &config)?;
//!
//! Reporter::new(OutputFormat::Console).report(&report)?;
//! Reporter::new(OutputFormat::Json).write_to_file(&report, "comparison.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;
mod markdown;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::analysis::ComparisonReport;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

/// Output format for comparison reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Console output with tables
    #[default]
    Console,
    /// Markdown format for documentation
    Markdown,
}

/// Reporter for comparison results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, report: &ComparisonReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write the formatted report to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &ComparisonReport, path: P) -> Result<()> {
        let path = path.as_ref();
        let output = self.format_report(report)?;
        fs::write(path, output)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Format the report as a string
    pub fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
            OutputFormat::Console => ConsoleReporter::format(report),
            OutputFormat::Markdown => MarkdownReporter::format(report),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
