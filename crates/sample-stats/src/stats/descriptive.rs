//! Moment-based descriptive statistics.
//!
//! These functions never validate sample size. An empty sample has a `NaN`
//! mean, and a sample with fewer than two values has a `NaN` variance, so
//! callers that care must check `is_finite()` on the result.

use std::cmp::Ordering;

/// Collect any sequence of numbers convertible to `f64` into an owned sample.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::to_sample;
///
/// let sample = to_sample([1_i32, 2, 3]);
/// assert_eq!(sample, vec![1.0, 2.0, 3.0]);
///
/// let mixed = to_sample([1.5_f32, 2.0, 4.25]);
/// assert_eq!(mixed, vec![1.5, 2.0, 4.25]);
/// ```
pub fn to_sample<I>(values: I) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    values.into_iter().map(Into::into).collect()
}

/// Sorted copy of the sample. The input is left untouched.
pub(crate) fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(total_order);
    sorted
}

fn total_order(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

/// Arithmetic mean.
///
/// Returns `NaN` for an empty sample.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(samples: &[f64]) -> f64 {
    let sum: f64 = samples.iter().sum();
    sum / samples.len() as f64
}

/// Unbiased sample variance (Bessel's correction, `n - 1` denominator).
///
/// Requires at least two values. A single value yields `NaN` from the
/// `0 / 0` division rather than an error, and so does an empty sample.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::variance;
///
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.5);
/// assert!(variance(&[7.0]).is_nan());
/// assert!(variance(&[]).is_nan());
/// ```
pub fn variance(samples: &[f64]) -> f64 {
    // An empty sum over `0 - 1` would otherwise give -0.0
    if samples.is_empty() {
        return f64::NAN;
    }

    let mean = mean(samples);
    let squared_diffs: f64 = samples.iter().map(|&x| (x - mean).powi(2)).sum();
    squared_diffs / (samples.len() as f64 - 1.0)
}

/// Sample standard deviation, the square root of [`variance`].
pub fn standard_deviation(samples: &[f64]) -> f64 {
    variance(samples).sqrt()
}
