//! End-to-end comparison of two samples
//!
//! Combines the descriptive and inferential layers: optionally filters
//! outliers, summarises both sides, runs Welch's t-test and collects the
//! result into a serializable [`ComparisonReport`].
//!
//! # Example
//!
//! ```
//! use sample_stats::analysis::compare_samples;
//! use sample_stats::config::AnalysisConfig;
//! use sample_stats::inference::Comparison;
//!
//! # fn example() -> sample_stats::Result<()> {
//! let baseline = vec![102.0, 98.0, 101.0, 99.0, 100.0, 250.0];
//! let candidate = vec![91.0, 89.0, 90.0, 92.0, 88.0, 90.0];
//!
//! let mut config = AnalysisConfig::default();
//! config.outliers.enabled = true;
//!
//! let report = compare_samples(&baseline, &candidate, &config)?;
//! assert_eq!(report.verdict, Comparison::Greater);
//! assert_eq!(report.a.outliers.unwrap().outliers_removed, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::{AnalysisConfig, OutlierConfig};
use crate::error::{Result, StatsError};
use crate::inference::{Comparison, WelchTest};
use crate::stats::{
    filter_outliers, percentage_difference, signed_percentage_difference, OutlierStats,
    PercentileSummary,
};

/// Minimum values per side for a variance to exist.
const MIN_TEST_SAMPLES: usize = 2;

/// Summary of one side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    pub label: String,
    /// Statistics over the values that entered the test
    pub summary: PercentileSummary,
    /// Present when outlier filtering ran
    pub outliers: Option<OutlierStats>,
}

/// Full result of comparing sample `a` against sample `b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub a: SampleReport,
    pub b: SampleReport,
    pub test: WelchTest,
    /// `|mean(a) - mean(b)|` relative to their midpoint, in percent
    #[serde(with = "crate::non_finite")]
    pub percentage_difference: f64,
    /// Same as `percentage_difference` but positive when `a` is larger
    #[serde(with = "crate::non_finite")]
    pub signed_percentage_difference: f64,
    pub verdict: Comparison,
}

impl ComparisonReport {
    /// Whether the verdict is anything other than [`Comparison::Equal`].
    pub fn is_significant(&self) -> bool {
        self.verdict != Comparison::Equal
    }
}

/// Compare two samples according to `config`.
///
/// # Errors
///
/// - [`StatsError::InvalidArgument`] if the configuration is out of range
/// - [`StatsError::InsufficientData`] if either side has fewer than two
///   values after filtering
#[instrument(
    skip_all,
    fields(len_a = a.len(), len_b = b.len(), alpha = config.comparison.alpha)
)]
pub fn compare_samples(a: &[f64], b: &[f64], config: &AnalysisConfig) -> Result<ComparisonReport> {
    config.validate()?;

    let side_a = prepare(a, &config.outliers)?;
    let side_b = prepare(b, &config.outliers)?;
    let (values_a, values_b) = (&*side_a.values, &*side_b.values);

    let test = WelchTest::new(values_a, values_b, config.comparison.alpha);
    let verdict = test.comparison();

    debug!(
        t = test.t_statistic,
        df = test.degrees_of_freedom,
        critical = test.critical_value,
        %verdict,
        "Compared samples"
    );

    Ok(ComparisonReport {
        a: SampleReport {
            label: config.comparison.label_a.clone(),
            summary: side_a.summary,
            outliers: side_a.outliers,
        },
        b: SampleReport {
            label: config.comparison.label_b.clone(),
            summary: side_b.summary,
            outliers: side_b.outliers,
        },
        test,
        percentage_difference: percentage_difference(values_a, values_b),
        signed_percentage_difference: signed_percentage_difference(values_a, values_b),
        verdict,
    })
}

/// One side of a comparison after filtering.
struct PreparedSample<'a> {
    values: Cow<'a, [f64]>,
    summary: PercentileSummary,
    outliers: Option<OutlierStats>,
}

/// Apply outlier filtering if enabled, then summarise what is left.
fn prepare<'a>(samples: &'a [f64], outliers: &OutlierConfig) -> Result<PreparedSample<'a>> {
    let (values, stats) = if outliers.enabled {
        let (filtered, stats) = filter_outliers(samples, outliers.multiplier);
        (Cow::Owned(filtered), Some(stats))
    } else {
        (Cow::Borrowed(samples), None)
    };

    let summary = match PercentileSummary::from_samples(&values) {
        Some(summary) if values.len() >= MIN_TEST_SAMPLES => summary,
        _ => {
            return Err(StatsError::InsufficientData {
                needed: MIN_TEST_SAMPLES,
                got: values.len(),
            })
        }
    };

    Ok(PreparedSample {
        values,
        summary,
        outliers: stats,
    })
}
