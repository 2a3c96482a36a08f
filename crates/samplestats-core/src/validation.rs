//! Entry checks shared by every public function.
//!
//! Shape problems are reported before any arithmetic runs, so callers get a
//! named error instead of a NaN that surfaces three functions later.

use crate::error::{Result, StatsError};

/// Fail with `EmptyInput` if `data` has no observations.
pub(crate) fn require_non_empty(data: &[f64], name: &str) -> Result<()> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput(format!("{name} is empty")));
    }
    Ok(())
}

/// Fail unless `data` holds at least `min` observations.
pub(crate) fn require_len(data: &[f64], min: usize, name: &str) -> Result<()> {
    require_non_empty(data, name)?;
    if data.len() < min {
        return Err(StatsError::InsufficientData(format!(
            "{name} needs at least {min} values, got {}",
            data.len()
        )));
    }
    Ok(())
}

/// Fail with `NonFiniteInput` if any value is NaN or infinite.
pub(crate) fn require_finite(data: &[f64], name: &str) -> Result<()> {
    if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
        return Err(StatsError::NonFiniteInput(format!(
            "{name}[{pos}] = {}",
            data[pos]
        )));
    }
    Ok(())
}

/// Non-empty and finite: the contract for every sample.
pub(crate) fn require_sample(data: &[f64], name: &str) -> Result<()> {
    require_non_empty(data, name)?;
    require_finite(data, name)
}

/// Paired sequences must have the same number of observations.
pub(crate) fn require_same_len(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(StatsError::DimensionMismatch(format!(
            "paired sequences differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    Ok(())
}

/// A scalar parameter must be a finite number.
pub(crate) fn require_finite_param(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(StatsError::NonFiniteInput(format!("{name} = {value}")));
    }
    Ok(())
}

/// Probabilities used as quantile arguments must lie strictly inside (0, 1).
pub(crate) fn require_open_unit(value: f64, name: &str) -> Result<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(StatsError::InvalidValue(format!(
            "{name} must lie in (0, 1), got {value}"
        )));
    }
    Ok(())
}

/// A scale parameter (standard deviation, margin of error) must be positive.
pub(crate) fn require_positive(value: f64, name: &str) -> Result<()> {
    require_finite_param(value, name)?;
    if value <= 0.0 {
        return Err(StatsError::DegenerateInput(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Degrees of freedom must be positive.
pub(crate) fn require_df(df: f64, name: &str) -> Result<()> {
    if !(df > 0.0) || !df.is_finite() {
        return Err(StatsError::DegenerateInput(format!(
            "{name} must be positive, got {df}"
        )));
    }
    Ok(())
}
