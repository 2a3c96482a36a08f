//! Incomplete beta series and the t / F probabilities built on it.

use crate::constants::BETA_SERIES_TERMS;
use crate::error::{Result, StatsError};
use crate::validation::{require_df, require_finite_param};

/// Truncated power series `x^a · Σ_{i<100} xⁱ / (i + a)`.
///
/// This is a fixed-length approximation, not the regularized incomplete beta
/// function: `b` is validated but does not enter the series, and the result
/// is not normalized by B(a, b). Values above 1 are possible.
///
/// # Arguments
/// * `a` - First shape parameter, > 0
/// * `b` - Second shape parameter, > 0
/// * `x` - Evaluation point in [0, 1]
pub fn incomplete_beta(a: f64, b: f64, x: f64) -> Result<f64> {
    require_df(a, "a")?;
    require_df(b, "b")?;
    require_finite_param(x, "x")?;
    if !(0.0..=1.0).contains(&x) {
        return Err(StatsError::InvalidValue(format!(
            "x must be in [0, 1], got {x}"
        )));
    }

    let sum: f64 = (0..BETA_SERIES_TERMS)
        .map(|i| x.powi(i as i32) / (i as f64 + a))
        .sum();
    Ok(x.powf(a) * sum)
}

/// Lower-tail F-distribution probability via the incomplete beta series.
///
/// `x = df1·F / (df1·F + df2)`, result `incomplete_beta(df1/2, df2/2, x)`.
pub fn f_distribution_probability(f: f64, df1: f64, df2: f64) -> Result<f64> {
    require_df(df1, "df1")?;
    require_df(df2, "df2")?;
    require_finite_param(f, "F")?;
    if f < 0.0 {
        return Err(StatsError::InvalidValue(format!(
            "F statistic must be non-negative, got {f}"
        )));
    }

    let x = df1 * f / (df1 * f + df2);
    incomplete_beta(df1 / 2.0, df2 / 2.0, x)
}

/// Student's t CDF approximation: `1 - ½·incomplete_beta(df/2, ½, df/(df+t²))`.
pub fn t_distribution_cdf(t: f64, df: f64) -> Result<f64> {
    require_df(df, "df")?;
    require_finite_param(t, "t")?;

    let x = df / (df + t * t);
    Ok(1.0 - 0.5 * incomplete_beta(df / 2.0, 0.5, x)?)
}
