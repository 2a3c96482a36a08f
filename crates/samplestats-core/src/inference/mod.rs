// =============================================================================
// Statistical Inference
// =============================================================================
//
// Classical hypothesis tests and interval estimates for in-memory samples:
//
//   - MEAN TESTS:   one-sample z-test (known σ), one-sample t-test
//   - ANOVA:        one-way analysis of variance across k groups
//   - CHI-SQUARE:   test of independence on a contingency table,
//                   goodness of fit against expected counts
//   - ESTIMATION:   confidence interval for a mean, required sample size,
//                   upper-tail normal probability, power of a z-test
//
// Every test reports `is_significant = p_value < ALPHA` with ALPHA = 0.05.
//
// P-VALUES OUTSIDE [0, 1]
// -----------------------
// The t and F p-values come from the incomplete beta series in
// `distributions`, which is not bounded by 1. For large F statistics or
// small degrees of freedom the reported p-value can be negative or exceed 1.
// The value is returned unchanged and a warning is logged. Clamp it before
// displaying it as a probability.
//
// =============================================================================

mod anova;
mod chi_square;
mod estimation;

pub use anova::{one_way_anova, AnovaResult};
pub use chi_square::{
    chi_square_goodness_of_fit, chi_square_test, ChiSquareResult, ContingencyTable,
    GoodnessOfFitResult,
};
pub use estimation::{
    confidence_interval, probability_under_normal, required_sample_size, statistical_power,
    ConfidenceInterval,
};
pub use mean_tests::{t_test, z_test, TTestResult, ZTestResult};

use crate::constants::ALPHA;

/// Significance decision shared by every test.
pub(crate) fn is_significant(p_value: f64) -> bool {
    p_value < ALPHA
}

/// Log a warning when an approximated p-value leaves the unit interval.
pub(crate) fn check_p_value(test: &str, p_value: f64) {
    if !(0.0..=1.0).contains(&p_value) {
        log::warn!("{test}: approximated p-value {p_value} lies outside [0, 1]");
    }
}
