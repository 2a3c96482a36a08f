// =============================================================================
// SampleStats Core Library
// =============================================================================
//
// A statistics engine for in-memory samples: descriptive statistics,
// distribution approximations, simple regression and classical hypothesis
// tests. Every function is pure. There is no engine object, no shared state
// and no I/O; callers pass slices of f64 and get values or records back.
//
// STRUCTURE:
// ----------
//   - descriptive:   mean, median, mode, spread, percentiles, skewness
//   - distributions: normal CDF / quantile, incomplete beta series,
//                    t / F / chi-square probabilities (plus statrs references)
//   - regression:    least-squares line, Pearson correlation, prediction
//   - inference:     z/t tests, ANOVA, chi-square tests, confidence intervals,
//                    sample size, power
//   - error:         StatsError and the Result alias
//   - constants:     α, default confidence level, approximation coefficients
//
// FOR MAINTAINERS:
// ----------------
// When adding new functionality:
//   1. Validate shape first (see `validation`) and return a StatsError rather
//      than letting NaN or infinity escape
//   2. Write tests in that module (see existing tests for examples)
//   3. Re-export public items here
//
// =============================================================================

pub mod constants;
pub mod descriptive;
pub mod distributions;
pub mod error;
pub mod inference;
pub mod regression;
mod validation;

// Re-export the everyday API at the crate root so users can write
// `samplestats_core::median` instead of `samplestats_core::descriptive::median`
pub use constants::{ALPHA, DEFAULT_CONFIDENCE_LEVEL};
pub use descriptive::{
    describe, interquartile_range, mean, median, mode, percentile, range, skewness,
    standard_deviation, variance, Skewness, SkewnessInterpretation, Summary,
};
pub use distributions::{
    chi_square_p_value, f_distribution_probability, incomplete_beta, inverse_normal, normal_cdf,
    t_distribution_cdf,
};
pub use error::{Result, StatsError};
pub use inference::{
    chi_square_goodness_of_fit, chi_square_test, confidence_interval, one_way_anova,
    probability_under_normal, required_sample_size, statistical_power, t_test, z_test,
    AnovaResult, ChiSquareResult, ConfidenceInterval, ContingencyTable, GoodnessOfFitResult,
    TTestResult, ZTestResult,
};
pub use regression::{correlation, linear_regression, predict, LinearFit};
