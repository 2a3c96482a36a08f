// =============================================================================
// Descriptive Statistics
// =============================================================================
//
// Single-sample summaries:
//
//   - CENTRAL TENDENCY: mean, median, mode
//   - SPREAD:           range, variance, standard deviation, percentile, IQR
//   - SHAPE:            skewness (with a symmetric/skewed interpretation)
//   - SUMMARY:          all of the above in one record
//
// CONVENTIONS:
// ------------
// - Variance and standard deviation use the POPULATION divisor N, not N-1.
//   The confidence interval and skewness formulas are calibrated against it.
//   Multiply by N/(N-1) if you need the unbiased sample variance.
// - Order statistics (median, percentile, mode) work on a sorted copy.
//   The caller's slice is never reordered.
//
// =============================================================================

mod central;
mod shape;
mod spread;
mod summary;

pub use central::{mean, median, mode};
pub use shape::{skewness, Skewness, SkewnessInterpretation};
pub use spread::{interquartile_range, percentile, range, standard_deviation, variance};
pub use summary::{describe, Summary};

pub(crate) use spread::{percentile_sorted, sum_squared_deviations};

/// Ascending copy of `data`; the input stays in caller order.
pub(crate) fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
