//! Interval estimates and planning calculations under the normal model.

use crate::descriptive::{mean, standard_deviation};
use crate::distributions::{inverse_normal, normal_cdf};
use crate::error::{Result, StatsError};
use crate::validation::{
    require_finite_param, require_open_unit, require_positive, require_sample,
};

/// Confidence interval for a mean.
///
/// `lower ≤ mean ≤ upper` holds only when `margin_of_error ≥ 0`. The critical
/// values from [`inverse_normal`] are negative, so a sample with spread gets
/// a negative margin and `lower > upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub mean: f64,
    pub margin_of_error: f64,
}

/// Critical value at 1 - (1 - level)/2.
fn critical_z(confidence_level: f64) -> Result<f64> {
    require_open_unit(confidence_level, "confidence level")?;
    inverse_normal(1.0 - (1.0 - confidence_level) / 2.0)
}

/// Normal-theory confidence interval for the mean of `data`.
///
/// margin = z · σ̂ / √n with σ̂ the population-divisor standard deviation.
/// Pass [`DEFAULT_CONFIDENCE_LEVEL`](crate::constants::DEFAULT_CONFIDENCE_LEVEL)
/// for a 95% interval.
pub fn confidence_interval(data: &[f64], confidence_level: f64) -> Result<ConfidenceInterval> {
    require_sample(data, "sample")?;
    let z = critical_z(confidence_level)?;

    let m = mean(data)?;
    let std_error = standard_deviation(data)? / (data.len() as f64).sqrt();
    let margin_of_error = z * std_error;

    Ok(ConfidenceInterval {
        lower: m - margin_of_error,
        upper: m + margin_of_error,
        mean: m,
        margin_of_error,
    })
}

/// Smallest n whose confidence interval half-width is at most `margin_of_error`.
///
/// n = ⌈(z · σ / E)²⌉
pub fn required_sample_size(
    margin_of_error: f64,
    confidence_level: f64,
    std_dev: f64,
) -> Result<u64> {
    require_positive(margin_of_error, "margin of error")?;
    require_finite_param(std_dev, "standard deviation")?;
    if std_dev < 0.0 {
        return Err(StatsError::InvalidValue(format!(
            "standard deviation must be non-negative, got {std_dev}"
        )));
    }
    let z = critical_z(confidence_level)?;

    let n = (z * std_dev / margin_of_error).powi(2).ceil();
    if !n.is_finite() || n > u64::MAX as f64 {
        return Err(StatsError::InvalidValue(format!(
            "required sample size {n} is not representable"
        )));
    }
    Ok(n as u64)
}

/// P(X > x) for X ~ N(mean, std_dev²).
pub fn probability_under_normal(x: f64, mean: f64, std_dev: f64) -> Result<f64> {
    require_finite_param(x, "x")?;
    require_finite_param(mean, "mean")?;
    require_positive(std_dev, "standard deviation")?;

    Ok(1.0 - normal_cdf((x - mean) / std_dev))
}

/// Power of a one-sided z-test.
///
/// ncp = effect_size · √n, power = 1 - Φ(inverse_normal(1 - α) - ncp).
/// Pass [`ALPHA`](crate::constants::ALPHA) for the conventional 5% level.
///
/// # Arguments
/// * `effect_size` - Standardized effect (Cohen's d)
/// * `sample_size` - Number of observations, ≥ 1
/// * `alpha` - Significance level in (0, 1)
pub fn statistical_power(effect_size: f64, sample_size: usize, alpha: f64) -> Result<f64> {
    require_finite_param(effect_size, "effect size")?;
    if sample_size == 0 {
        return Err(StatsError::InsufficientData(
            "power needs a sample size of at least 1".to_string(),
        ));
    }
    require_open_unit(alpha, "alpha")?;

    let ncp = effect_size * (sample_size as f64).sqrt();
    let critical = inverse_normal(1.0 - alpha)?;
    Ok(1.0 - normal_cdf(critical - ncp))
}
