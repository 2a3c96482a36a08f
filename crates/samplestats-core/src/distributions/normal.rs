//! Standard normal CDF and quantile approximations.

use crate::constants::{
    INVERSE_NORMAL_A, INVERSE_NORMAL_B, NORMAL_CDF_B, NORMAL_CDF_P, NORMAL_PDF_SCALE,
};
use crate::error::{Result, StatsError};

/// P(Z ≤ z) for a standard normal Z.
///
/// Abramowitz & Stegun 26.2.17. The tail area is computed from |z| and
/// reflected for positive z. NaN in gives NaN out.
pub fn normal_cdf(z: f64) -> f64 {
    let b = NORMAL_CDF_B;
    let t = 1.0 / (1.0 + NORMAL_CDF_P * z.abs());
    let density = NORMAL_PDF_SCALE * (-z * z / 2.0).exp();
    let tail = density * t * (b[0] + t * (b[1] + t * (b[2] + t * (b[3] + t * b[4]))));

    if z > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Critical value for probability `p`.
///
/// With `y = √(-2·ln(1-p))`, returns `A(y) / B(y)` where A and B are the
/// quartics from [`INVERSE_NORMAL_A`] and [`INVERSE_NORMAL_B`]. This is the
/// Odeh & Evans ratio without its leading `y` term, so it is not a true
/// normal quantile: it increases with `p` but stays negative on all of
/// [0, 1). [`exact::inverse_normal`](super::exact::inverse_normal) gives the
/// real quantile.
///
/// # Errors
/// `InvalidValue` unless `0 ≤ p < 1`.
pub fn inverse_normal(p: f64) -> Result<f64> {
    if !(0.0..1.0).contains(&p) {
        return Err(StatsError::InvalidValue(format!(
            "probability must lie in [0, 1), got {p}"
        )));
    }

    let a = INVERSE_NORMAL_A;
    let b = INVERSE_NORMAL_B;
    let y = (-2.0 * (1.0 - p).ln()).sqrt();
    let num = (((a[4] * y + a[3]) * y + a[2]) * y + a[1]) * y + a[0];
    let den = (((b[4] * y + b[3]) * y + b[2]) * y + b[1]) * y + b[0];
    Ok(num / den)
}
