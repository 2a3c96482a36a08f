//! Skewness of a sample.
//!
//! Uses the adjusted Fisher–Pearson coefficient
//!
//! ```text
//! G = n / ((n-1)(n-2)) · Σ((x - x̄) / s)³
//! ```
//!
//! where `s` is the population standard deviation.

use std::fmt;

use crate::constants::SKEWNESS_SYMMETRY_BOUND;
use crate::error::{Result, StatsError};
use crate::validation::require_len;

use super::{mean, standard_deviation};

/// Direction of asymmetry read off a skewness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkewnessInterpretation {
    /// Long right tail (value > 0.5).
    PositivelySkewed,
    /// Long left tail (value < -0.5).
    NegativelySkewed,
    /// Within ±0.5.
    ApproximatelySymmetric,
}

impl SkewnessInterpretation {
    /// Classify a skewness value.
    pub fn from_value(value: f64) -> Self {
        if value > SKEWNESS_SYMMETRY_BOUND {
            Self::PositivelySkewed
        } else if value < -SKEWNESS_SYMMETRY_BOUND {
            Self::NegativelySkewed
        } else {
            Self::ApproximatelySymmetric
        }
    }
}

impl fmt::Display for SkewnessInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PositivelySkewed => "positively skewed",
            Self::NegativelySkewed => "negatively skewed",
            Self::ApproximatelySymmetric => "approximately symmetric",
        };
        f.write_str(label)
    }
}

/// Skewness value together with its interpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skewness {
    pub value: f64,
    pub interpretation: SkewnessInterpretation,
}

/// Adjusted Fisher–Pearson skewness.
///
/// Needs at least three observations and a non-zero standard deviation.
pub fn skewness(data: &[f64]) -> Result<Skewness> {
    require_len(data, 3, "sample")?;
    let m = mean(data)?;
    let sd = standard_deviation(data)?;
    if sd == 0.0 {
        return Err(StatsError::DegenerateInput(
            "skewness is undefined for a constant sample".to_string(),
        ));
    }

    let n = data.len() as f64;
    let cubed: f64 = data.iter().map(|&x| ((x - m) / sd).powi(3)).sum();
    let value = cubed * (n / ((n - 1.0) * (n - 2.0)));

    Ok(Skewness {
        value,
        interpretation: SkewnessInterpretation::from_value(value),
    })
}
