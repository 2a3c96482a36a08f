//! One-call summary of a sample.

use crate::error::Result;
use crate::validation::require_sample;

use super::central::{median_sorted, mode_sorted};
use super::{percentile_sorted, skewness, sorted_copy, sum_squared_deviations, Skewness};

/// Descriptive statistics for a single sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// All most-frequent values, ascending.
    pub mode: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Population variance (divisor N).
    pub variance: f64,
    pub standard_deviation: f64,
    pub first_quartile: f64,
    pub third_quartile: f64,
    pub interquartile_range: f64,
    /// `None` when the sample has fewer than three values or no spread.
    pub skewness: Option<Skewness>,
}

/// Compute every descriptive statistic for `data` with a single sort.
pub fn describe(data: &[f64]) -> Result<Summary> {
    require_sample(data, "sample")?;

    let sorted = sorted_copy(data);
    let count = data.len();
    let mean = data.iter().sum::<f64>() / count as f64;
    let variance = sum_squared_deviations(data, mean) / count as f64;
    let standard_deviation = variance.sqrt();

    let min = sorted[0];
    let max = sorted[count - 1];
    let first_quartile = percentile_sorted(&sorted, 25.0);
    let third_quartile = percentile_sorted(&sorted, 75.0);

    let skewness = if count >= 3 && standard_deviation > 0.0 {
        Some(skewness(data)?)
    } else {
        None
    };

    Ok(Summary {
        count,
        mean,
        median: median_sorted(&sorted),
        mode: mode_sorted(&sorted),
        min,
        max,
        range: max - min,
        variance,
        standard_deviation,
        first_quartile,
        third_quartile,
        interquartile_range: third_quartile - first_quartile,
        skewness,
    })
}
