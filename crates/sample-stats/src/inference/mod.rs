//! Two-sample hypothesis testing
//!
//! Welch's t-test with critical values from closed-form approximations of
//! the Student-t quantile function. Data flows one way: sample means and
//! variances feed the t statistic and degrees of freedom, which are compared
//! against a critical value to produce a verdict.
//!
//! # Examples
//!
//! ```
//! use sample_stats::inference::{compare, Comparison, WelchTest, DEFAULT_ALPHA};
//!
//! let control = vec![12.1, 11.8, 12.4, 12.0, 11.9, 12.2];
//! let candidate = vec![10.2, 10.5, 10.1, 10.4, 10.3, 10.0];
//!
//! assert_eq!(compare(&control, &candidate, DEFAULT_ALPHA), Comparison::Greater);
//!
//! let test = WelchTest::new(&control, &candidate, DEFAULT_ALPHA);
//! println!(
//!     "t = {:.3}, df = {:.2}, critical = {:.3}",
//!     test.t_statistic, test.degrees_of_freedom, test.critical_value
//! );
//! ```

pub mod distribution;
pub mod welch;

pub use distribution::{critical_t_value, inverse_normal_cdf, inverse_t_distribution};
pub use welch::{
    compare, degrees_of_freedom, greater_than, less_than, t_value, Comparison, WelchTest,
    DEFAULT_ALPHA,
};
