//! Properties that hold for every sample.

use proptest::prelude::*;
use samplestats_core::{median, mode, percentile, variance, StatsError};

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..60)
}

fn integer_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-1000i32..1000).prop_map(f64::from), 1..60)
}

fn min_max(data: &[f64]) -> (f64, f64) {
    data.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_median_between_extremes(data in sample()) {
        let (lo, hi) = min_max(&data);
        let m = median(&data).unwrap();
        prop_assert!(lo <= m && m <= hi);
    }

    #[test]
    fn prop_variance_non_negative(data in sample()) {
        prop_assert!(variance(&data).unwrap() >= 0.0);
    }

    #[test]
    fn prop_variance_zero_iff_constant(data in integer_sample()) {
        let constant = data.iter().all(|&v| v == data[0]);
        prop_assert_eq!(variance(&data).unwrap() == 0.0, constant);
    }

    #[test]
    fn prop_percentile_endpoints(data in sample()) {
        let (lo, hi) = min_max(&data);
        prop_assert_eq!(percentile(&data, 0.0).unwrap(), lo);
        prop_assert_eq!(percentile(&data, 100.0).unwrap(), hi);
    }

    #[test]
    fn prop_percentile_50_is_median(data in sample()) {
        prop_assert_eq!(percentile(&data, 50.0).unwrap(), median(&data).unwrap());
    }

    #[test]
    fn prop_percentile_monotone(data in sample(), p in 0.0f64..100.0, q in 0.0f64..100.0) {
        let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
        // Interpolation rounding can differ by a few ulps between nearby ranks
        prop_assert!(percentile(&data, lo).unwrap() <= percentile(&data, hi).unwrap() + 1e-6);
    }

    #[test]
    fn prop_order_statistics_leave_input_alone(data in sample()) {
        let before = data.clone();
        let order_stats = |d: &[f64]| {
            (median(d).unwrap(), percentile(d, 37.5).unwrap(), mode(d).unwrap())
        };
        let first = order_stats(&data);
        let second = order_stats(&data);
        prop_assert_eq!(&data, &before);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_mode_sorted_and_present(data in integer_sample()) {
        let modes = mode(&data).unwrap();
        prop_assert!(!modes.is_empty());
        prop_assert!(modes.windows(2).all(|w| w[0] < w[1]));
        for m in &modes {
            prop_assert!(data.contains(m));
        }
    }

    #[test]
    fn prop_mode_ignores_input_order(mut data in integer_sample()) {
        let forward = mode(&data).unwrap();
        data.reverse();
        prop_assert_eq!(forward, mode(&data).unwrap());
    }
}

#[test]
fn empty_sample_is_rejected() {
    assert!(matches!(median(&[]), Err(StatsError::EmptyInput(_))));
    assert!(matches!(percentile(&[], 50.0), Err(StatsError::EmptyInput(_))));
}
