//! Outlier detection using the Interquartile Range (IQR) method.
//!
//! Values outside `[Q1 - k*IQR, Q3 + k*IQR]` are outliers, where `k` is the
//! fence multiplier (1.5 by default). Quartiles are computed with the same
//! linear interpolation as [`percentile`](super::percentile). Samples with
//! fewer than [`MIN_OUTLIER_SAMPLES`] values are never filtered.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::descriptive::sorted_copy;
use super::percentiles::quantile_sorted;

/// Conventional Tukey fence multiplier.
pub const DEFAULT_MULTIPLIER: f64 = 1.5;

/// Smallest sample for which quartiles are considered meaningful.
pub const MIN_OUTLIER_SAMPLES: usize = 4;

/// First and third quartiles of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartileBounds {
    pub q1: f64,
    pub q3: f64,
}

impl QuartileBounds {
    /// Compute Q1 and Q3 from a sorted copy of the sample.
    ///
    /// Returns `None` when the sample has fewer than four values.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.len() < MIN_OUTLIER_SAMPLES {
            return None;
        }

        let sorted = sorted_copy(samples);
        Some(Self {
            q1: quantile_sorted(&sorted, 0.25),
            q3: quantile_sorted(&sorted, 0.75),
        })
    }

    /// Interquartile range (Q3 - Q1).
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Inclusive `(lower, upper)` fences for the given multiplier.
    pub fn fences(&self, multiplier: f64) -> (f64, f64) {
        let iqr = self.iqr();
        (self.q1 - multiplier * iqr, self.q3 + multiplier * iqr)
    }
}

/// Result of running IQR outlier detection over a sample.
#[derive(Debug, Clone)]
pub struct OutlierResult {
    /// Positions of rejected values in the input, ascending
    pub outlier_indices: Vec<usize>,
    /// Lower fence (Q1 - k*IQR)
    pub lower_fence: f64,
    /// Upper fence (Q3 + k*IQR)
    pub upper_fence: f64,
    /// Q1
    pub q1: f64,
    /// Q3
    pub q3: f64,
    pub iqr: f64,
}

impl OutlierResult {
    /// Compute quartiles and fences and flag every value outside them.
    ///
    /// `None` when the sample is too small to have meaningful quartiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use sample_stats::stats::OutlierResult;
    ///
    /// let timings = [4.0, 6.0, 5.0, 7.0, 5.5, 60.0];
    /// let result = OutlierResult::detect(&timings, 1.5).unwrap();
    /// assert_eq!(result.outlier_indices, [5]);
    /// assert_eq!(result.clean_samples(&timings).len(), 5);
    /// ```
    pub fn detect(samples: &[f64], multiplier: f64) -> Option<Self> {
        let bounds = QuartileBounds::from_samples(samples)?;
        let (lower_fence, upper_fence) = bounds.fences(multiplier);

        let outlier_indices: Vec<usize> = samples
            .iter()
            .enumerate()
            .filter(|(_, value)| !(lower_fence..=upper_fence).contains(*value))
            .map(|(i, _)| i)
            .collect();

        Some(OutlierResult {
            outlier_indices,
            lower_fence,
            upper_fence,
            q1: bounds.q1,
            q3: bounds.q3,
            iqr: bounds.iqr(),
        })
    }

    /// Get the clean samples (outliers removed), in their original order.
    pub fn clean_samples(&self, samples: &[f64]) -> Vec<f64> {
        samples
            .iter()
            .copied()
            .filter(|value| self.contains(*value))
            .collect()
    }

    /// Whether `value` lies within the inclusive fences.
    pub fn contains(&self, value: f64) -> bool {
        (self.lower_fence..=self.upper_fence).contains(&value)
    }

    /// At least one value fell outside the fences.
    pub fn has_outliers(&self) -> bool {
        !self.outlier_indices.is_empty()
    }
}

/// Counts reported by [`outlier_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierStats {
    pub original_count: usize,
    pub filtered_count: usize,
    pub outliers_removed: usize,
    /// Percentage of the original sample removed, rounded to 2 decimals
    pub outlier_percentage: f64,
}

impl OutlierStats {
    fn from_counts(original_count: usize, filtered_count: usize) -> Self {
        let outliers_removed = original_count - filtered_count;
        let outlier_percentage = if original_count == 0 {
            0.0
        } else {
            let percentage = outliers_removed as f64 / original_count as f64 * 100.0;
            (percentage * 100.0).round() / 100.0
        };

        Self {
            original_count,
            filtered_count,
            outliers_removed,
            outlier_percentage,
        }
    }
}

/// Filter a sample and report the counts from a single detection pass.
///
/// Equivalent to calling [`remove_outliers`] and [`outlier_stats`] with the
/// same arguments, but sorts and scans the sample only once.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::filter_outliers;
///
/// let (clean, stats) = filter_outliers(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0], 1.5);
/// assert_eq!(clean.len(), 9);
/// assert_eq!(stats.outliers_removed, 1);
/// ```
pub fn filter_outliers(samples: &[f64], multiplier: f64) -> (Vec<f64>, OutlierStats) {
    let clean = match OutlierResult::detect(samples, multiplier) {
        Some(result) => {
            let clean = result.clean_samples(samples);
            debug!(
                removed = samples.len() - clean.len(),
                lower_fence = result.lower_fence,
                upper_fence = result.upper_fence,
                "Filtered outliers"
            );
            clean
        }
        None => samples.to_vec(),
    };

    let stats = OutlierStats::from_counts(samples.len(), clean.len());
    (clean, stats)
}

/// Return a new sample with IQR outliers removed.
///
/// Samples with fewer than four values are returned unchanged. The input is
/// never modified and retained values keep their original order.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::remove_outliers;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
/// let clean = remove_outliers(&data, 1.5);
/// assert!(!clean.contains(&100.0));
/// assert_eq!(clean.len(), 9);
/// ```
pub fn remove_outliers(samples: &[f64], multiplier: f64) -> Vec<f64> {
    filter_outliers(samples, multiplier).0
}

/// Report how many values [`remove_outliers`] would discard.
///
/// Samples below the four-value floor report zero removed.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::outlier_stats;
///
/// let stats = outlier_stats(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0], 1.5);
/// assert_eq!(stats.outliers_removed, 1);
/// assert_eq!(stats.outlier_percentage, 10.0);
/// ```
pub fn outlier_stats(samples: &[f64], multiplier: f64) -> OutlierStats {
    let removed = OutlierResult::detect(samples, multiplier)
        .map_or(0, |result| result.outlier_indices.len());
    OutlierStats::from_counts(samples.len(), samples.len() - removed)
}
