//! Worked examples through the public API.

use approx::assert_abs_diff_eq;
use samplestats_core::{
    chi_square_test, confidence_interval, correlation, describe, linear_regression, mode,
    one_way_anova, predict, ContingencyTable, StatsError, DEFAULT_CONFIDENCE_LEVEL,
};

#[test]
fn regression_recovers_exact_line() {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 3.0).collect();

    let fit = linear_regression(&x, &y).unwrap();
    assert_abs_diff_eq!(fit.slope, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fit.intercept, 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(predict(11.0, &x, &y).unwrap(), 25.0, epsilon = 1e-9);
}

#[test]
fn anova_on_three_shifted_groups() {
    let groups = vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ];
    let r = one_way_anova(&groups).unwrap();

    assert_abs_diff_eq!(r.grand_mean, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(r.ss_between, 54.0, epsilon = 1e-9);
    assert_abs_diff_eq!(r.ss_within, 6.0, epsilon = 1e-9);
    assert_eq!(r.df_between, 2);
    assert_eq!(r.df_within, 6);
    assert_abs_diff_eq!(r.f_statistic, 27.0, epsilon = 1e-9);
}

#[test]
fn chi_square_on_two_by_two_table() {
    let table = ContingencyTable::from_rows(&[[10.0, 20.0], [30.0, 40.0]]).unwrap();
    let r = chi_square_test(&table).unwrap();

    assert_eq!(r.row_totals, vec![30.0, 70.0]);
    assert_eq!(r.column_totals, vec![40.0, 60.0]);
    assert_eq!(r.total, 100.0);
    assert_abs_diff_eq!(r.expected[[0, 0]], 12.0, epsilon = 1e-12);
    assert_eq!(r.degrees_of_freedom, 1);

    let by_hand = 4.0 / 12.0 + 4.0 / 18.0 + 4.0 / 28.0 + 4.0 / 42.0;
    assert_abs_diff_eq!(r.chi_square, by_hand, epsilon = 1e-12);
}

#[test]
fn confidence_interval_of_one_to_five() {
    let ci = confidence_interval(&[1.0, 2.0, 3.0, 4.0, 5.0], DEFAULT_CONFIDENCE_LEVEL).unwrap();
    let std_error = 2.0_f64.sqrt() / 5.0_f64.sqrt();

    assert_abs_diff_eq!(ci.mean, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(std_error, 0.632, epsilon = 1e-3);
    assert_abs_diff_eq!(ci.margin_of_error / std_error, -0.756, epsilon = 1e-3);
    assert_abs_diff_eq!(ci.margin_of_error, -0.478, epsilon = 1e-3);
    assert_abs_diff_eq!(3.0 - ci.lower, ci.upper - 3.0, epsilon = 1e-12);
    // Negative margin: the bounds come out swapped
    assert!(ci.upper < ci.mean && ci.mean < ci.lower);
}

#[test]
fn constant_sample_has_zero_width_interval() {
    let ci = confidence_interval(&[4.0, 4.0, 4.0], DEFAULT_CONFIDENCE_LEVEL).unwrap();
    assert_eq!(ci.margin_of_error, 0.0);
    assert!(ci.lower <= ci.mean && ci.mean <= ci.upper);
}

#[test]
fn mode_reports_every_tie() {
    assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap(), vec![1.0, 2.0]);
}

#[test]
fn summary_of_exam_scores() {
    let scores = [72.0, 85.0, 91.0, 85.0, 64.0, 78.0, 85.0, 99.0, 70.0];
    let s = describe(&scores).unwrap();

    assert_eq!(s.count, 9);
    assert_eq!(s.median, 85.0);
    assert_eq!(s.mode, vec![85.0]);
    assert_eq!(s.range, 35.0);
    assert!(s.min <= s.first_quartile && s.first_quartile <= s.median);
    assert!(s.median <= s.third_quartile && s.third_quartile <= s.max);
}

#[test]
fn shape_errors_are_reported_before_computation() {
    assert!(matches!(
        linear_regression(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(StatsError::DimensionMismatch(_))
    ));
    assert!(matches!(
        ContingencyTable::from_rows(&[vec![1.0, 2.0], vec![3.0]]),
        Err(StatsError::DimensionMismatch(_))
    ));
    assert!(matches!(
        one_way_anova(&[vec![1.0, 2.0]]),
        Err(StatsError::InsufficientData(_))
    ));
    assert!(matches!(describe(&[]), Err(StatsError::EmptyInput(_))));
}

#[test]
fn degenerate_inputs_are_errors_not_nan() {
    assert!(matches!(
        correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
        Err(StatsError::DegenerateInput(_))
    ));
    let table = ContingencyTable::from_rows(&[[0.0, 0.0], [3.0, 4.0]]).unwrap();
    assert!(matches!(
        chi_square_test(&table),
        Err(StatsError::DegenerateInput(_))
    ));
}
