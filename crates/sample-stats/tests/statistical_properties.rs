//! Property-based tests for the statistics and t-test invariants
//!
//! Run with: cargo test -p sample-stats --test statistical_properties

use proptest::prelude::*;
use sample_stats::inference::{
    compare, critical_t_value, degrees_of_freedom, greater_than, less_than, t_value, Comparison,
};
use sample_stats::stats::{
    mean, median, outlier_stats, percentage_difference, percentile, remove_outliers,
    signed_percentage_difference, variance,
};

// ============================================================================
// Strategies
// ============================================================================

fn sample_strategy(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0, min_len..40)
}

fn alpha_strategy() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![0.10, 0.05, 0.025, 0.01, 0.005, 0.001])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ============================================================================
// Order statistics
// ============================================================================

proptest! {
    /// Property: the median is the 50th percentile
    #[test]
    fn median_is_fiftieth_percentile(samples in sample_strategy(1)) {
        let mid = median(&samples).unwrap();
        let p50 = percentile(&samples, 50.0).unwrap().unwrap();
        prop_assert!(close(mid, p50), "median {} p50 {}", mid, p50);
    }

    /// Property: percentiles stay within the sample range and are monotone in p
    #[test]
    fn percentile_is_bounded_and_monotone(
        samples in sample_strategy(1),
        p in 0.0f64..=100.0,
        q in 0.0f64..=100.0,
    ) {
        let (low, high) = if p <= q { (p, q) } else { (q, p) };
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let at_low = percentile(&samples, low).unwrap().unwrap();
        let at_high = percentile(&samples, high).unwrap().unwrap();

        prop_assert!(at_low >= min - 1e-9 && at_high <= max + 1e-9);
        prop_assert!(at_low <= at_high + 1e-9);
    }

    /// Property: out-of-range percentiles are always rejected
    #[test]
    fn percentile_rejects_out_of_range(samples in sample_strategy(0), excess in 0.001f64..1000.0) {
        prop_assert!(percentile(&samples, 100.0 + excess).is_err());
        prop_assert!(percentile(&samples, -excess).is_err());
    }

    /// Property: no operation mutates its input
    #[test]
    fn inputs_are_never_mutated(a in sample_strategy(2), b in sample_strategy(2)) {
        let original_a = a.clone();
        let original_b = b.clone();

        let _ = median(&a);
        let _ = percentile(&a, 90.0);
        let _ = remove_outliers(&a, 1.5);
        let _ = outlier_stats(&a, 1.5);
        let _ = compare(&a, &b, 0.05);

        prop_assert_eq!(a, original_a);
        prop_assert_eq!(b, original_b);
    }
}

// ============================================================================
// Outliers
// ============================================================================

proptest! {
    /// Property: samples below four values pass through untouched
    #[test]
    fn small_samples_are_not_filtered(samples in prop::collection::vec(-1e6f64..1e6, 0..4)) {
        prop_assert_eq!(remove_outliers(&samples, 1.5), samples.clone());

        let stats = outlier_stats(&samples, 1.5);
        prop_assert_eq!(stats.outliers_removed, 0);
        prop_assert_eq!(stats.outlier_percentage, 0.0);
        prop_assert_eq!(stats.filtered_count, samples.len());
    }

    /// Property: filtering keeps a subsequence of the input and its counts add up
    #[test]
    fn filtering_keeps_subsequence(samples in sample_strategy(4), multiplier in 0.0f64..5.0) {
        let filtered = remove_outliers(&samples, multiplier);
        let stats = outlier_stats(&samples, multiplier);

        prop_assert!(filtered.len() <= samples.len());
        prop_assert_eq!(stats.filtered_count, filtered.len());
        prop_assert_eq!(stats.original_count, stats.filtered_count + stats.outliers_removed);
        prop_assert!((0.0..=100.0).contains(&stats.outlier_percentage));

        let mut remaining = samples.iter();
        for value in &filtered {
            prop_assert!(remaining.any(|v| v == value), "{} out of order", value);
        }
    }

    /// Property: filtering never empties a sample
    #[test]
    fn filtering_never_empties_sample(samples in sample_strategy(4)) {
        let filtered = remove_outliers(&samples, 1.5);
        prop_assert!(!filtered.is_empty());
    }
}

// ============================================================================
// Percentage differences
// ============================================================================

proptest! {
    /// Property: absolute percentage difference is symmetric and non-negative
    #[test]
    fn percentage_difference_is_symmetric(a in sample_strategy(1), b in sample_strategy(1)) {
        let forward = percentage_difference(&a, &b);
        let backward = percentage_difference(&b, &a);

        prop_assert_eq!(forward, backward);
        prop_assert!(forward >= 0.0);
    }

    /// Property: signed percentage difference is antisymmetric
    #[test]
    fn signed_percentage_difference_is_antisymmetric(a in sample_strategy(1), b in sample_strategy(1)) {
        let forward = signed_percentage_difference(&a, &b);
        let backward = signed_percentage_difference(&b, &a);

        prop_assert_eq!(forward, -backward);
        prop_assert_eq!(forward.abs(), percentage_difference(&a, &b));
    }

    /// Property: the sign follows the difference of means
    #[test]
    fn signed_difference_follows_means(a in sample_strategy(1), b in sample_strategy(1)) {
        let signed = signed_percentage_difference(&a, &b);
        let (mean_a, mean_b) = (mean(&a), mean(&b));

        if mean_a > mean_b {
            prop_assert!(signed > 0.0);
        } else if mean_a < mean_b {
            prop_assert!(signed < 0.0);
        } else {
            prop_assert_eq!(signed, 0.0);
        }
    }
}

// ============================================================================
// Welch's t-test
// ============================================================================

proptest! {
    /// Property: swapping samples negates t
    #[test]
    fn t_value_is_antisymmetric(a in sample_strategy(2), b in sample_strategy(2)) {
        prop_assert_eq!(t_value(&a, &b), -t_value(&b, &a));
    }

    /// Property: a sample compared with itself has t = 0
    #[test]
    fn t_value_of_identical_samples_is_zero(a in sample_strategy(2)) {
        prop_assert_eq!(t_value(&a, &a), 0.0);
        prop_assert_eq!(compare(&a, &a, 0.05), Comparison::Equal);
    }

    /// Property: Welch df is symmetric and bounded by the pooled df
    #[test]
    fn degrees_of_freedom_symmetric_and_bounded(a in sample_strategy(2), b in sample_strategy(2)) {
        prop_assume!(variance(&a) > 0.0 || variance(&b) > 0.0);

        let df = degrees_of_freedom(&a, &b);
        let pooled = (a.len() + b.len() - 2) as f64;

        prop_assert_eq!(df, degrees_of_freedom(&b, &a));
        prop_assert!(df > 0.0);
        prop_assert!(df <= pooled * (1.0 + 1e-12), "df {} pooled {}", df, pooled);
    }

    /// Property: greater and less are never both true
    #[test]
    fn verdicts_are_mutually_exclusive(
        a in sample_strategy(2),
        b in sample_strategy(2),
        alpha in alpha_strategy(),
    ) {
        prop_assert!(!(greater_than(&a, &b, alpha) && less_than(&a, &b, alpha)));

        let expected = if greater_than(&a, &b, alpha) {
            Comparison::Greater
        } else if less_than(&a, &b, alpha) {
            Comparison::Less
        } else {
            Comparison::Equal
        };
        prop_assert_eq!(compare(&a, &b, alpha), expected);
    }

    /// Property: greater for (a, b) is less for (b, a)
    #[test]
    fn verdict_mirrors_under_swap(
        a in sample_strategy(2),
        b in sample_strategy(2),
        alpha in alpha_strategy(),
    ) {
        prop_assert_eq!(greater_than(&a, &b, alpha), less_than(&b, &a, alpha));
    }

    /// Property: shifting a sample far upwards makes it significantly greater
    #[test]
    fn large_shift_is_significant(a in sample_strategy(5), shift in 1e5f64..1e6) {
        prop_assume!(variance(&a) > 0.0);
        let shifted: Vec<f64> = a.iter().map(|x| x + shift).collect();

        prop_assert_eq!(compare(&shifted, &a, 0.05), Comparison::Greater);
        prop_assert_eq!(compare(&a, &shifted, 0.05), Comparison::Less);
    }

    /// Property: critical values grow as alpha shrinks, for any df
    #[test]
    fn critical_value_monotone_in_alpha(df in 0.5f64..2000.0) {
        let alphas = [0.10, 0.05, 0.025, 0.01, 0.005];
        let values: Vec<f64> = alphas.iter().map(|&a| critical_t_value(df, a)).collect();
        for pair in values.windows(2) {
            prop_assert!(pair[0] < pair[1], "df {} values {:?}", df, values);
        }
    }
}
