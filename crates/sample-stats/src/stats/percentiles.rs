//! Percentile calculations over numeric samples.
//!
//! Percentiles use linear interpolation between closest ranks (the R-7 /
//! Excel `PERCENTILE.INC` convention): the fractional rank of percentile
//! `p` in a sorted sample of `n` values is `(n - 1) * p / 100`.

use serde::{Deserialize, Serialize};

use super::descriptive::{mean, sorted_copy, standard_deviation};
use crate::error::{Result, StatsError};

/// Value at a fractional rank of an already sorted, non-empty sample.
///
/// An integral rank returns that element exactly, otherwise the result is
/// interpolated between the floor and ceiling ranks.
pub(crate) fn value_at_rank(sorted: &[f64], rank: f64) -> f64 {
    let lower_index = rank.floor() as usize;
    let upper_index = rank.ceil() as usize;

    if lower_index == upper_index {
        sorted[lower_index]
    } else {
        let lower_value = sorted[lower_index];
        let upper_value = sorted[upper_index];
        let fraction = rank - lower_index as f64;
        lower_value + fraction * (upper_value - lower_value)
    }
}

/// Quantile at `fraction` (0.0 to 1.0) of an already sorted, non-empty sample.
pub(crate) fn quantile_sorted(sorted: &[f64], fraction: f64) -> f64 {
    value_at_rank(sorted, (sorted.len() - 1) as f64 * fraction)
}

/// The `p`-th percentile (0 to 100 inclusive) of an unsorted sample.
///
/// `Ok(None)` for an empty sample. `p = 0` and `p = 100` return the
/// minimum and maximum without interpolation.
///
/// # Errors
///
/// Returns [`StatsError::InvalidArgument`] carrying `p` if it is not a
/// finite number in `[0, 100]`.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::percentile;
///
/// let data = vec![10.0, 20.0, 30.0, 40.0, 50.0];
/// assert_eq!(percentile(&data, 25.0).unwrap(), Some(20.0));
/// assert_eq!(percentile(&data, 37.5).unwrap(), Some(25.0));
/// assert!(percentile(&data, 150.0).is_err());
/// ```
pub fn percentile(samples: &[f64], p: f64) -> Result<Option<f64>> {
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidArgument {
            name: "percentile",
            expected: "a number between 0 and 100",
            value: p,
        });
    }

    if samples.is_empty() {
        return Ok(None);
    }

    let sorted = sorted_copy(samples);
    let last = sorted.len() - 1;

    let value = if p == 0.0 {
        sorted[0]
    } else if p == 100.0 {
        sorted[last]
    } else {
        value_at_rank(&sorted, last as f64 * p / 100.0)
    };

    Ok(Some(value))
}

/// Median of the sample, or `None` if it is empty.
///
/// For an even count the two central values are averaged.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// assert_eq!(median(&[]), None);
/// ```
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let sorted = sorted_copy(samples);
    let n = sorted.len();
    let mid = n / 2;

    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Five-number summary plus tail percentiles and moments of one sample,
/// all computed from a single sorted copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileSummary {
    pub min: f64,
    pub p25: f64,
    /// Median
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
    pub p99: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

impl PercentileSummary {
    /// Summarise a sample, or `None` if it is empty.
    ///
    /// A single value has no spread, so its `std_dev` is `0.0` rather
    /// than the `NaN` that [`standard_deviation`] would give.
    ///
    /// # Examples
    ///
    /// ```
    /// use sample_stats::stats::PercentileSummary;
    ///
    /// let latencies = [12.0, 15.0, 11.0, 14.0, 13.0];
    /// let summary = PercentileSummary::from_samples(&latencies).unwrap();
    /// assert_eq!((summary.min, summary.p50, summary.max), (11.0, 13.0, 15.0));
    /// assert_eq!(summary.mean, 13.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let sorted = sorted_copy(samples);
        let n = sorted.len();

        let std_dev = if n > 1 {
            standard_deviation(&sorted)
        } else {
            0.0
        };

        Some(Self {
            min: sorted[0],
            p25: quantile_sorted(&sorted, 0.25),
            p50: quantile_sorted(&sorted, 0.50),
            p75: quantile_sorted(&sorted, 0.75),
            p95: quantile_sorted(&sorted, 0.95),
            p99: quantile_sorted(&sorted, 0.99),
            max: sorted[n - 1],
            mean: mean(&sorted),
            std_dev,
            count: n,
        })
    }

    /// Relative spread, `std_dev / mean`. Infinite for a zero mean.
    pub fn coefficient_of_variation(&self) -> f64 {
        match self.mean {
            m if m == 0.0 => f64::INFINITY,
            m => self.std_dev / m,
        }
    }

    /// Interquartile range (p75 - p25).
    pub fn iqr(&self) -> f64 {
        self.p75 - self.p25
    }
}
