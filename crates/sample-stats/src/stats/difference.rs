//! Relative differences between a sample mean and a reference.
//!
//! The reference is either another sample (compared through its mean) or a
//! plain value. Both functions divide by the absolute midpoint
//! `|(a + b) / 2|`:
//!
//! - equal inputs give `0.0`, including `0 vs 0`;
//! - a zero midpoint with unequal inputs (e.g. `1 vs -1`) gives an infinite
//!   result instead of an error.

use super::descriptive::mean;

/// What a sample is compared against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reference<'a> {
    /// Another sample, compared through its mean
    Sample(&'a [f64]),
    /// A fixed value
    Value(f64),
}

impl Reference<'_> {
    /// The scalar used in the comparison.
    pub fn value(&self) -> f64 {
        match self {
            Reference::Sample(samples) => mean(samples),
            Reference::Value(value) => *value,
        }
    }
}

impl<'a> From<&'a [f64]> for Reference<'a> {
    fn from(samples: &'a [f64]) -> Self {
        Reference::Sample(samples)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Reference<'a> {
    fn from(samples: &'a [f64; N]) -> Self {
        Reference::Sample(samples)
    }
}

impl<'a> From<&'a Vec<f64>> for Reference<'a> {
    fn from(samples: &'a Vec<f64>) -> Self {
        Reference::Sample(samples)
    }
}

impl From<f64> for Reference<'_> {
    fn from(value: f64) -> Self {
        Reference::Value(value)
    }
}

/// Absolute percentage difference between the sample mean and `other`.
///
/// `|a - b| / |(a + b) / 2| * 100`. Symmetric and never negative.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::percentage_difference;
///
/// let a = [10.0, 10.0];
/// assert_eq!(percentage_difference(&a, 10.0), 0.0);
/// assert!((percentage_difference(&a, &[20.0, 20.0]) - 66.666).abs() < 0.01);
/// assert_eq!(percentage_difference(&[1.0], -1.0), f64::INFINITY);
/// ```
pub fn percentage_difference<'a>(samples: &[f64], other: impl Into<Reference<'a>>) -> f64 {
    let a = mean(samples);
    let b = other.into().value();
    relative_difference(a, b).abs()
}

/// Signed percentage difference between the sample mean and `other`.
///
/// `(a - b) / |(a + b) / 2| * 100`. Positive when the sample mean exceeds
/// the reference. Swapping the arguments negates the result.
///
/// # Examples
///
/// ```
/// use sample_stats::stats::signed_percentage_difference;
///
/// assert!(signed_percentage_difference(&[120.0], 100.0) > 0.0);
/// assert!(signed_percentage_difference(&[80.0], 100.0) < 0.0);
/// ```
pub fn signed_percentage_difference<'a>(
    samples: &[f64],
    other: impl Into<Reference<'a>>,
) -> f64 {
    let a = mean(samples);
    let b = other.into().value();
    relative_difference(a, b)
}

fn relative_difference(a: f64, b: f64) -> f64 {
    if a == b {
        return 0.0;
    }

    let midpoint = ((a + b) / 2.0).abs();
    if midpoint == 0.0 {
        return f64::INFINITY.copysign(a - b);
    }

    (a - b) / midpoint * 100.0
}
