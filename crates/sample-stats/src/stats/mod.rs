//! Order statistics and descriptive measures over numeric samples
//!
//! Every function here takes a borrowed slice and works on an owned sorted
//! copy when ordering matters, so callers can share samples freely.
//!
//! # Examples
//!
//! ```
//! use sample_stats::stats::{mean, median, percentile, remove_outliers, standard_deviation};
//!
//! let samples = vec![12.0, 11.0, 10.5, 11.5, 12.0, 11.0, 150.0];
//!
//! let filtered = remove_outliers(&samples, 1.5);
//! assert!(!filtered.contains(&150.0));
//!
//! println!(
//!     "mean: {:.2}, median: {:?}, p95: {:?}, sd: {:.2}",
//!     mean(&filtered),
//!     median(&filtered),
//!     percentile(&filtered, 95.0).unwrap(),
//!     standard_deviation(&filtered),
//! );
//! ```

pub mod descriptive;
pub mod difference;
pub mod outliers;
pub mod percentiles;

pub use descriptive::{mean, standard_deviation, to_sample, variance};
pub use difference::{percentage_difference, signed_percentage_difference, Reference};
pub use outliers::{
    filter_outliers, outlier_stats, remove_outliers, OutlierResult, OutlierStats, QuartileBounds,
    DEFAULT_MULTIPLIER,
};
pub use percentiles::{median, percentile, PercentileSummary};
