//! Closed-form quantile approximations for the normal and Student-t
//! distributions.
//!
//! All quantiles here are upper-tail: `inverse_normal_cdf(alpha)` is the `z`
//! with `P(Z > z) = alpha`, and `critical_t_value(df, alpha)` is the `t` with
//! `P(T > t) = alpha`. No tables or iterative solvers are involved, so the
//! t quantiles are only as accurate as the regime they fall in:
//!
//! | degrees of freedom | method                               | typical relative error |
//! |--------------------|--------------------------------------|------------------------|
//! | `df == 1`          | exact Cauchy inverse                 | exact                  |
//! | `df == 2`          | normal-based closed form             | 8% to 70%, worse for small alpha |
//! | `2 < df < 8`       | Cornish-Fisher + small-sample term   | 5% to 45%              |
//! | `8 <= df < 30`     | Cornish-Fisher, up to four terms     | under 1%               |
//! | `df >= 30`         | Cornish-Fisher                       | under 0.5%             |
//! | `df >= 1000`       | normal quantile                      | under 0.5%             |

use tracing::trace;

/// Common significance levels and their exact upper-tail normal quantiles.
const PINNED_NORMAL_QUANTILES: [(f64, f64); 6] = [
    (0.10, 1.2815515655446004),
    (0.05, 1.6448536269514722),
    (0.025, 1.959963984540054),
    (0.01, 2.3263478740408408),
    (0.005, 2.5758293035489004),
    (0.001, 3.090232306167813),
];

/// Alphas within this distance of a pinned level use the pinned quantile.
const PINNED_ALPHA_TOLERANCE: f64 = 1e-10;

/// Tail probability below which the rational correction is dropped.
const ASYMPTOTIC_TAIL: f64 = 1e-20;

/// Degrees of freedom at which t is replaced by the normal distribution.
pub const NORMAL_APPROXIMATION_DF: f64 = 1000.0;

// Rational approximation coefficients (Abramowitz & Stegun 26.2.23).
const C0: f64 = 2.515517;
const C1: f64 = 0.802853;
const C2: f64 = 0.010328;
const D1: f64 = 1.432788;
const D2: f64 = 0.189269;
const D3: f64 = 0.001308;

/// Upper-tail standard normal quantile.
///
/// Returns `+inf` for `alpha <= 0` and `-inf` for `alpha >= 1`. The common
/// levels 0.10, 0.05, 0.025, 0.01, 0.005 and 0.001 return exact constants,
/// everything else uses a rational approximation accurate to about `4.5e-4`.
///
/// # Examples
///
/// ```
/// use sample_stats::inference::inverse_normal_cdf;
///
/// assert!((inverse_normal_cdf(0.05) - 1.645).abs() < 0.003);
/// assert_eq!(inverse_normal_cdf(1.0 / 20.0), inverse_normal_cdf(0.05));
/// assert!(inverse_normal_cdf(0.95) < 0.0);
/// ```
pub fn inverse_normal_cdf(alpha: f64) -> f64 {
    if alpha <= 0.0 {
        return f64::INFINITY;
    }
    if alpha >= 1.0 {
        return f64::NEG_INFINITY;
    }

    if let Some(&(_, z)) = PINNED_NORMAL_QUANTILES
        .iter()
        .find(|(level, _)| (alpha - level).abs() < PINNED_ALPHA_TOLERANCE)
    {
        return z;
    }

    let (p, sign) = if alpha > 0.5 {
        (1.0 - alpha, -1.0)
    } else {
        (alpha, 1.0)
    };

    let t = (-2.0 * p.ln()).sqrt();
    if p < ASYMPTOTIC_TAIL {
        return sign * t;
    }

    let numerator = C0 + C1 * t + C2 * t * t;
    let denominator = 1.0 + D1 * t + D2 * t * t + D3 * t * t * t;

    sign * (t - numerator / denominator)
}

/// One-tailed critical value of Student's t distribution.
///
/// Returns the `t` with `P(T > t) = alpha` for `df` degrees of freedom.
///
/// Edge cases:
/// - `NaN` in either argument gives `NaN`, which fails both one-tailed tests
/// - `df <= 0` or `alpha <= 0` gives `+inf`
/// - `alpha >= 1` gives `-inf`
/// - `df >= 1000` uses [`inverse_normal_cdf`] directly
///
/// See the module documentation for the accuracy of the remaining regimes.
///
/// # Examples
///
/// ```
/// use sample_stats::inference::critical_t_value;
///
/// // df = 1 is the exact Cauchy quantile
/// assert!((critical_t_value(1.0, 0.05) - 6.314).abs() < 0.001);
///
/// // moderate df is close to tabulated values
/// assert!((critical_t_value(10.0, 0.05) - 1.812).abs() < 0.01);
/// ```
pub fn critical_t_value(df: f64, alpha: f64) -> f64 {
    // Zero variance in both samples makes the Welch df NaN
    if df.is_nan() || alpha.is_nan() {
        return f64::NAN;
    }
    if df <= 0.0 || alpha <= 0.0 {
        return f64::INFINITY;
    }
    if alpha >= 1.0 {
        return f64::NEG_INFINITY;
    }

    if df >= NORMAL_APPROXIMATION_DF {
        trace!(df, alpha, "Using normal approximation for critical value");
        return inverse_normal_cdf(alpha);
    }

    inverse_t_distribution(df, alpha)
}

/// Upper-tail Student-t quantile for `0 < df < 1000` and `0 < alpha < 1`.
///
/// Prefer [`critical_t_value`], which also handles the edge cases.
pub fn inverse_t_distribution(df: f64, alpha: f64) -> f64 {
    if df == 1.0 {
        trace!(alpha, "Using Cauchy inverse for df = 1");
        return (std::f64::consts::PI * (0.5 - alpha)).tan();
    }

    let z = inverse_normal_cdf(alpha);

    if df == 2.0 {
        trace!(alpha, "Using closed form for df = 2");
        let z2 = z * z;
        return z / (1.0 - z2 / (z2 + 2.0)).sqrt();
    }

    trace!(df, alpha, "Using Cornish-Fisher expansion");
    cornish_fisher(z, df)
}

/// Cornish-Fisher expansion of the normal quantile `z` into a t quantile.
///
/// Correction terms switch on as `df` grows (first at 4, second at 6, third
/// at 8, fourth at 10). Below 8 an extra `z (z^2 + 1) / (4 df)` term is added.
fn cornish_fisher(z: f64, df: f64) -> f64 {
    let z2 = z * z;
    let z4 = z2 * z2;
    let z6 = z4 * z2;
    let z8 = z4 * z4;

    let mut t = z;

    if df >= 4.0 {
        let g1 = z * (z2 + 1.0) / 4.0;
        t += g1 / df;
    }
    if df >= 6.0 {
        let g2 = z * (5.0 * z4 + 16.0 * z2 + 3.0) / 96.0;
        t += g2 / df.powi(2);
    }
    if df >= 8.0 {
        let g3 = z * (3.0 * z6 + 19.0 * z4 + 17.0 * z2 - 15.0) / 384.0;
        t += g3 / df.powi(3);
    }
    if df >= 10.0 {
        let g4 = z * (79.0 * z8 + 776.0 * z6 + 1482.0 * z4 - 1920.0 * z2 - 945.0) / 92160.0;
        t += g4 / df.powi(4);
    }

    if df < 8.0 {
        t += z * (1.0 / (4.0 * df)) * (z2 + 1.0);
    }

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHAS: [f64; 5] = [0.10, 0.05, 0.025, 0.01, 0.005];

    #[test]
    fn test_inverse_normal_cdf_pinned_levels() {
        assert_eq!(inverse_normal_cdf(0.05), 1.6448536269514722);
        assert_eq!(inverse_normal_cdf(0.025), 1.959963984540054);
        assert_eq!(inverse_normal_cdf(0.001), 3.090232306167813);
    }

    #[test]
    fn test_inverse_normal_cdf_pinned_tolerance() {
        assert_eq!(inverse_normal_cdf(1.0 / 20.0), inverse_normal_cdf(0.05));
        assert_eq!(inverse_normal_cdf(0.1 + 1e-12), inverse_normal_cdf(0.10));
        assert_eq!(inverse_normal_cdf(1.0 - 0.99), inverse_normal_cdf(0.01));
    }

    #[test]
    fn test_inverse_normal_cdf_rational_approximation() {
        // exact: 0.841621, 0.524401, 0.253347
        assert!((inverse_normal_cdf(0.2) - 0.841621).abs() < 5e-4);
        assert!((inverse_normal_cdf(0.3) - 0.524401).abs() < 5e-4);
        assert!((inverse_normal_cdf(0.4) - 0.253347).abs() < 5e-4);
        assert!(inverse_normal_cdf(0.5).abs() < 5e-4);
    }

    #[test]
    fn test_inverse_normal_cdf_reflects_upper_half() {
        assert!((inverse_normal_cdf(0.95) + 1.645).abs() < 0.003);
        assert!((inverse_normal_cdf(0.8) + inverse_normal_cdf(0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_normal_cdf_edges() {
        assert_eq!(inverse_normal_cdf(0.0), f64::INFINITY);
        assert_eq!(inverse_normal_cdf(-0.5), f64::INFINITY);
        assert_eq!(inverse_normal_cdf(1.0), f64::NEG_INFINITY);
        assert_eq!(inverse_normal_cdf(2.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_inverse_normal_cdf_extreme_tail() {
        let p = 1e-25;
        assert_eq!(inverse_normal_cdf(p), (-2.0 * p.ln()).sqrt());
        assert!(inverse_normal_cdf(1e-15) > inverse_normal_cdf(1e-10));
    }

    #[test]
    fn test_critical_t_value_edges() {
        assert_eq!(critical_t_value(0.0, 0.05), f64::INFINITY);
        assert_eq!(critical_t_value(-3.0, 0.05), f64::INFINITY);
        assert_eq!(critical_t_value(10.0, 0.0), f64::INFINITY);
        assert_eq!(critical_t_value(10.0, 1.0), f64::NEG_INFINITY);
        assert_eq!(critical_t_value(10.0, 1.5), f64::NEG_INFINITY);
    }

    #[test]
    fn test_critical_t_value_nan_propagates() {
        assert!(critical_t_value(f64::NAN, 0.05).is_nan());
        assert!(critical_t_value(10.0, f64::NAN).is_nan());
        assert!(critical_t_value(f64::NAN, f64::NAN).is_nan());
    }

    #[test]
    fn test_critical_t_value_cauchy() {
        assert!((critical_t_value(1.0, 0.05) - 6.314).abs() < 0.001);
        assert!((critical_t_value(1.0, 0.10) - 3.078).abs() < 0.001);
        assert!((critical_t_value(1.0, 0.01) - 31.821).abs() < 0.01);
    }

    #[test]
    fn test_critical_t_value_df_two_closed_form() {
        let z = inverse_normal_cdf(0.05);
        let expected = z * ((z * z + 2.0) / 2.0).sqrt();
        assert!((critical_t_value(2.0, 0.05) - expected).abs() < 1e-12);

        // tabulated 2.920; the closed form runs low
        let value = critical_t_value(2.0, 0.05);
        assert!(value < 2.920 && (value - 2.920).abs() / 2.920 < 0.70);
    }

    #[test]
    fn test_critical_t_value_large_df_is_normal() {
        assert_eq!(critical_t_value(1000.0, 0.05), inverse_normal_cdf(0.05));
        assert_eq!(critical_t_value(1e6, 0.01), inverse_normal_cdf(0.01));
    }

    #[test]
    fn test_critical_t_value_fractional_df() {
        // Welch df is rarely an integer
        let low = critical_t_value(8.0, 0.05);
        let mid = critical_t_value(8.5, 0.05);
        let high = critical_t_value(9.0, 0.05);
        assert!(low > mid && mid > high);
    }

    #[test]
    fn test_critical_t_value_monotone_in_alpha() {
        for df in [1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 8.0, 10.0, 25.0, 100.0, 999.0, 1000.0] {
            let values: Vec<f64> = ALPHAS.iter().map(|&a| critical_t_value(df, a)).collect();
            for pair in values.windows(2) {
                assert!(pair[0] < pair[1], "df={} values={:?}", df, values);
            }
        }
    }

    #[test]
    fn test_critical_t_value_converges_to_normal() {
        let z = inverse_normal_cdf(0.05);
        for df in [100.0, 200.0, 500.0, 1000.0] {
            let t = critical_t_value(df, 0.05);
            assert!((t - z).abs() / z < 0.01, "df={} t={}", df, t);
        }
    }

    #[test]
    fn test_cornish_fisher_without_terms_below_four() {
        // Only the small-sample term applies for 2 < df < 4
        let z = inverse_normal_cdf(0.05);
        let expected = z + z * (z * z + 1.0) / 12.0;
        assert!((critical_t_value(3.0, 0.05) - expected).abs() < 1e-12);
    }
}
