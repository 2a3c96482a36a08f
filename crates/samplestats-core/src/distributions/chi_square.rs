//! Chi-square upper-tail probability via Wilson–Hilferty.
//!
//! (χ²/df)^(1/3) is approximately normal with mean 1 - 2/(9·df) and
//! variance 2/(9·df). Standardizing gives a z whose upper tail approximates
//! P(χ² ≥ statistic).

use crate::error::{Result, StatsError};
use crate::validation::{require_df, require_finite_param};

use super::normal_cdf;

/// Upper-tail p-value for a chi-square statistic with `df` degrees of freedom.
pub fn chi_square_p_value(chi_square: f64, df: f64) -> Result<f64> {
    require_df(df, "degrees of freedom")?;
    require_finite_param(chi_square, "chi-square statistic")?;
    if chi_square < 0.0 {
        return Err(StatsError::InvalidValue(format!(
            "chi-square statistic must be non-negative, got {chi_square}"
        )));
    }

    let k = 2.0 / (9.0 * df);
    let z = ((chi_square / df).cbrt() - (1.0 - k)) / k.sqrt();
    Ok(1.0 - normal_cdf(z))
}
