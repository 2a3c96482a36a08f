//! Range, variance, standard deviation and percentiles.

use crate::error::{Result, StatsError};
use crate::validation::{require_finite_param, require_sample};

use super::{mean, sorted_copy};

/// Largest value minus smallest value.
pub fn range(data: &[f64]) -> Result<f64> {
    require_sample(data, "sample")?;
    let (min, max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Ok(max - min)
}

/// Σ(x - center)²
pub(crate) fn sum_squared_deviations(data: &[f64], center: f64) -> f64 {
    data.iter().map(|&x| (x - center) * (x - center)).sum()
}

/// Population variance: Σ(x - x̄)² / N.
///
/// A single observation has variance zero.
pub fn variance(data: &[f64]) -> Result<f64> {
    let m = mean(data)?;
    Ok(sum_squared_deviations(data, m) / data.len() as f64)
}

/// Square root of the population variance.
pub fn standard_deviation(data: &[f64]) -> Result<f64> {
    Ok(variance(data)?.sqrt())
}

/// Percentile by linear interpolation between closest ranks.
///
/// The fractional rank is `(p / 100) * (n - 1)`; the result blends the two
/// neighbouring order statistics by the fractional part. `p = 0` returns the
/// minimum and `p = 100` the maximum.
///
/// # Arguments
/// * `data` - The sample (any order)
/// * `p` - Percentile in [0, 100]
pub fn percentile(data: &[f64], p: f64) -> Result<f64> {
    require_sample(data, "sample")?;
    check_percentile(p)?;
    Ok(percentile_sorted(&sorted_copy(data), p))
}

fn check_percentile(p: f64) -> Result<()> {
    require_finite_param(p, "percentile")?;
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidValue(format!(
            "percentile must be in [0, 100], got {p}"
        )));
    }
    Ok(())
}

/// Interpolated percentile of an already ascending, non-empty slice.
pub(crate) fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let index = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    let weight = index - lower as f64;

    if weight == 0.0 {
        return sorted[lower];
    }
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Third quartile minus first quartile.
pub fn interquartile_range(data: &[f64]) -> Result<f64> {
    require_sample(data, "sample")?;
    let sorted = sorted_copy(data);
    Ok(percentile_sorted(&sorted, 75.0) - percentile_sorted(&sorted, 25.0))
}
