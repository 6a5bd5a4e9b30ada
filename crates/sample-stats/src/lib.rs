//! Statistics for numeric samples
//!
//! This crate provides descriptive statistics, robust outlier filtering and
//! two-sample significance testing over plain `&[f64]` slices.
//!
//! # Features
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation
//! - **Percentiles**: linear interpolation between closest ranks (R-7)
//! - **Outlier filtering**: IQR fences with a configurable multiplier
//! - **Relative differences**: absolute and signed percentage differences
//! - **Welch's t-test**: one-tailed greater/less tests and a three-way
//!   comparison, with critical values from closed-form approximations
//! - **Reports**: TOML-configured comparisons rendered as JSON, console
//!   tables or Markdown
//!
//! # Example
//!
//! ```
//! use sample_stats::inference::{compare, greater_than, Comparison, DEFAULT_ALPHA};
//! use sample_stats::stats::{median, percentile, remove_outliers};
//!
//! let before = vec![100.0, 200.0, 300.0];
//! let after = vec![1.0, 2.0, 3.0];
//!
//! assert!(greater_than(&before, &after, DEFAULT_ALPHA));
//! assert_eq!(compare(&after, &before, DEFAULT_ALPHA), Comparison::Less);
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! assert_eq!(percentile(&data, 50.0).unwrap(), Some(5.5));
//! assert_eq!(median(&data), Some(5.5));
//!
//! let noisy = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
//! assert!(!remove_outliers(&noisy, 1.5).contains(&100.0));
//! ```
//!
//! # Degenerate input
//!
//! Among the primitives only `percentile` validates its argument. The rest return
//! non-finite values for input they cannot handle: the mean of an empty
//! sample and the variance of a single value are `NaN`, and critical values
//! for `df <= 0` or `alpha` outside `(0, 1)` are infinite.

pub mod analysis;
pub mod config;
pub mod error;
pub mod inference;
mod non_finite;
pub mod reporter;
pub mod stats;

// Re-export main types for convenience
pub use analysis::{compare_samples, ComparisonReport};
pub use config::AnalysisConfig;
pub use error::{Result, StatsError};
pub use inference::{Comparison, WelchTest};
pub use reporter::{OutputFormat, Reporter};
