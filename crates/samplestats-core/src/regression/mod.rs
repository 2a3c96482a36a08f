// =============================================================================
// Simple Linear Regression and Correlation
// =============================================================================
//
// Ordinary least squares for one predictor, in closed form:
//
//     slope     = (nΣxy - ΣxΣy) / (nΣx² - (Σx)²)
//     intercept = (Σy - slope·Σx) / n
//
// and the Pearson product-moment correlation
//
//     r = Σ(x - x̄)(y - ȳ) / √(Σ(x - x̄)² · Σ(y - ȳ)²)
//
// A constant x makes the slope undefined; a constant x or y makes r
// undefined. Both are reported as DegenerateInput.
//
// =============================================================================

use crate::error::{Result, StatsError};
use crate::validation::{require_finite, require_finite_param, require_len, require_same_len};

/// Fitted line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

fn check_pairs(x: &[f64], y: &[f64]) -> Result<()> {
    require_same_len(x, y)?;
    require_len(x, 2, "x")?;
    require_finite(x, "x")?;
    require_finite(y, "y")
}

fn is_constant(data: &[f64]) -> bool {
    data.iter().all(|&v| v == data[0])
}

/// Least-squares line through the points (xᵢ, yᵢ).
///
/// # Errors
/// - `DimensionMismatch` if x and y differ in length
/// - `InsufficientData` for fewer than two points
/// - `DegenerateInput` if every x is the same
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    check_pairs(x, y)?;
    if is_constant(x) {
        return Err(StatsError::DegenerateInput(
            "x has zero variance; the slope is undefined".to_string(),
        ));
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_xx: f64 = x.iter().map(|a| a * a).sum();

    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        return Err(StatsError::DegenerateInput(
            "regression denominator is zero".to_string(),
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(LinearFit { slope, intercept })
}

/// Pearson correlation coefficient.
///
/// # Errors
/// Same shape rules as [`linear_regression`]; `DegenerateInput` if either
/// series is constant.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    check_pairs(x, y)?;
    if is_constant(x) || is_constant(y) {
        return Err(StatsError::DegenerateInput(
            "correlation is undefined for a constant series".to_string(),
        ));
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denom_x = 0.0;
    let mut denom_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    Ok(numerator / (denom_x * denom_y).sqrt())
}

/// Fit a line to (`x_data`, `y_data`) and evaluate it at `x`.
pub fn predict(x: f64, x_data: &[f64], y_data: &[f64]) -> Result<f64> {
    require_finite_param(x, "x")?;
    Ok(linear_regression(x_data, y_data)?.predict(x))
}
