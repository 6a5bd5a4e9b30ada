//! Welch's two-sample t-test.
//!
//! Compares the means of two samples without assuming equal variances. Each
//! sample needs at least two values; smaller samples produce non-finite
//! statistics rather than errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::distribution::critical_t_value;
use crate::stats::{mean, variance};

/// Conventional one-tailed significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Outcome of a one-tailed three-way comparison.
///
/// Statistical "greater" is not a total order: two genuinely different
/// samples can still compare `Equal` when the difference is not significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// First sample's mean is significantly greater
    Greater,
    /// First sample's mean is significantly less
    Less,
    /// No significant difference at the chosen alpha
    Equal,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Comparison::Greater => "greater",
            Comparison::Less => "less",
            Comparison::Equal => "equal",
        };
        f.write_str(label)
    }
}

/// Welch t statistic, `(mean(a) - mean(b)) / sqrt(var(a)/|a| + var(b)/|b|)`.
///
/// Identical means give exactly `0.0`. Swapping the samples negates the
/// statistic. If both samples have zero variance but different means the
/// result is infinite.
///
/// # Examples
///
/// ```
/// use sample_stats::inference::t_value;
///
/// let a = [10.0, 11.0, 12.0, 13.0, 14.0];
/// let b = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(t_value(&a, &b), 9.0);
/// assert_eq!(t_value(&b, &a), -9.0);
/// assert_eq!(t_value(&a, &a), 0.0);
/// ```
pub fn t_value(a: &[f64], b: &[f64]) -> f64 {
    let difference = mean(a) - mean(b);
    if difference == 0.0 {
        return 0.0;
    }

    let noise = (variance(a) / a.len() as f64 + variance(b) / b.len() as f64).sqrt();
    difference / noise
}

/// Welch-Satterthwaite degrees of freedom.
///
/// With `n1 = var(a)/|a|` and `n2 = var(b)/|b|`:
/// `(n1 + n2)^2 / (n1^2 / (|a| - 1) + n2^2 / (|b| - 1))`.
///
/// Symmetric in its arguments and never above the pooled `|a| + |b| - 2`.
///
/// # Examples
///
/// ```
/// use sample_stats::inference::degrees_of_freedom;
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let b = [2.0, 3.0, 4.0, 5.0, 6.0];
/// assert_eq!(degrees_of_freedom(&a, &b), 8.0);
/// ```
pub fn degrees_of_freedom(a: &[f64], b: &[f64]) -> f64 {
    let len_a = a.len() as f64;
    let len_b = b.len() as f64;
    let n1 = variance(a) / len_a;
    let n2 = variance(b) / len_b;

    (n1 + n2).powi(2) / (n1.powi(2) / (len_a - 1.0) + n2.powi(2) / (len_b - 1.0))
}

/// A Welch's t-test evaluated at a significance level.
///
/// Holds the t statistic, the degrees of freedom and the one-tailed critical
/// value. Computed fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WelchTest {
    #[serde(with = "crate::non_finite")]
    pub t_statistic: f64,
    #[serde(with = "crate::non_finite")]
    pub degrees_of_freedom: f64,
    #[serde(with = "crate::non_finite")]
    pub critical_value: f64,
    pub alpha: f64,
}

impl WelchTest {
    /// Run the test of `a` against `b` at `alpha`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sample_stats::inference::{Comparison, WelchTest};
    ///
    /// let test = WelchTest::new(&[100.0, 200.0, 300.0], &[1.0, 2.0, 3.0], 0.05);
    /// assert!(test.is_greater());
    /// assert_eq!(test.comparison(), Comparison::Greater);
    /// ```
    pub fn new(a: &[f64], b: &[f64], alpha: f64) -> Self {
        let degrees_of_freedom = degrees_of_freedom(a, b);
        Self {
            t_statistic: t_value(a, b),
            degrees_of_freedom,
            critical_value: critical_t_value(degrees_of_freedom, alpha),
            alpha,
        }
    }

    /// `a`'s mean is significantly greater than `b`'s.
    pub fn is_greater(&self) -> bool {
        self.t_statistic > self.critical_value
    }

    /// `a`'s mean is significantly less than `b`'s.
    pub fn is_less(&self) -> bool {
        self.t_statistic < -self.critical_value
    }

    /// Three-way verdict. `Greater` wins if both tails somehow match.
    pub fn comparison(&self) -> Comparison {
        if self.is_greater() {
            Comparison::Greater
        } else if self.is_less() {
            Comparison::Less
        } else {
            Comparison::Equal
        }
    }
}

/// One-tailed test that `a`'s mean is greater than `b`'s at `alpha`.
///
/// # Examples
///
/// ```
/// use sample_stats::inference::{greater_than, DEFAULT_ALPHA};
///
/// assert!(greater_than(&[100.0, 200.0, 300.0], &[1.0, 2.0, 3.0], DEFAULT_ALPHA));
/// assert!(!greater_than(&[1.0, 2.0, 3.0], &[100.0, 200.0, 300.0], DEFAULT_ALPHA));
/// ```
pub fn greater_than(a: &[f64], b: &[f64], alpha: f64) -> bool {
    WelchTest::new(a, b, alpha).is_greater()
}

/// One-tailed test that `a`'s mean is less than `b`'s at `alpha`.
pub fn less_than(a: &[f64], b: &[f64], alpha: f64) -> bool {
    WelchTest::new(a, b, alpha).is_less()
}

/// Three-way significance comparison of `a` against `b` at `alpha`.
///
/// # Examples
///
/// ```
/// use sample_stats::inference::{compare, Comparison};
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let b = [2.0, 3.0, 4.0, 5.0, 6.0];
/// assert_eq!(compare(&a, &b, 0.05), Comparison::Equal);
/// ```
pub fn compare(a: &[f64], b: &[f64], alpha: f64) -> Comparison {
    WelchTest::new(a, b, alpha).comparison()
}
