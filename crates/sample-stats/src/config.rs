//! Configuration for two-sample comparisons
//!
//! Settings are loaded from TOML. Every section and field is optional; an
//! empty document yields the same values as [`AnalysisConfig::default`].
//!
//! ```toml
//! [comparison]
//! alpha = 0.01
//! label_a = "baseline"
//! label_b = "candidate"
//!
//! [outliers]
//! enabled = true
//! multiplier = 3.0
//!
//! [report]
//! format = "markdown"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, StatsError};
use crate::inference::DEFAULT_ALPHA;
use crate::reporter::OutputFormat;
use crate::stats::DEFAULT_MULTIPLIER;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    /// Significance test settings
    #[serde(default)]
    pub comparison: ComparisonConfig,
    /// Outlier filtering applied before testing
    #[serde(default)]
    pub outliers: OutlierConfig,
    /// Report rendering
    #[serde(default)]
    pub report: ReportConfig,
}

impl AnalysisConfig {
    /// Load and validate configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - A value is out of range (see [`AnalysisConfig::validate`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sample_stats::config::AnalysisConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = AnalysisConfig::from_file("comparison.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use sample_stats::config::AnalysisConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = AnalysisConfig::from_str("[comparison]\nalpha = 0.01")?;
    /// assert_eq!(config.comparison.alpha, 0.01);
    /// assert!(!config.outliers.enabled);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate().context("Invalid analysis configuration")?;
        Ok(config)
    }

    /// Check that alpha lies in `(0, 1)` and the outlier multiplier is a
    /// finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        let alpha = self.comparison.alpha;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(StatsError::InvalidArgument {
                name: "alpha",
                expected: "strictly between 0 and 1",
                value: alpha,
            });
        }

        let multiplier = self.outliers.multiplier;
        if !(multiplier.is_finite() && multiplier >= 0.0) {
            return Err(StatsError::InvalidArgument {
                name: "outlier multiplier",
                expected: "a finite number >= 0",
                value: multiplier,
            });
        }

        Ok(())
    }
}

/// Significance test settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// One-tailed significance level (default: 0.05)
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Display name of the first sample (default: "A")
    #[serde(default = "default_label_a")]
    pub label_a: String,
    /// Display name of the second sample (default: "B")
    #[serde(default = "default_label_b")]
    pub label_b: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            label_a: default_label_a(),
            label_b: default_label_b(),
        }
    }
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_label_a() -> String {
    "A".to_string()
}

fn default_label_b() -> String {
    "B".to_string()
}

/// Outlier filtering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Filter both samples before testing (default: false)
    #[serde(default)]
    pub enabled: bool,
    /// IQR fence multiplier (default: 1.5)
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            multiplier: default_multiplier(),
        }
    }
}

fn default_multiplier() -> f64 {
    DEFAULT_MULTIPLIER
}

/// Report rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Output format (default: console)
    #[serde(default)]
    pub format: OutputFormat,
}
