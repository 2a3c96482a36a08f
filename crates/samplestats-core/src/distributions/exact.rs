// =============================================================================
// Exact Distribution Functions
// =============================================================================
//
// Reference CDFs backed by statrs. The inference procedures in this crate do
// not use these; they use the approximations in the parent module. These
// exist so callers (and the accuracy tests below) can measure how far an
// approximation is from the true distribution at a given point.
//
// =============================================================================

use std::fmt::Display;

use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, Normal, StudentsT};

use crate::error::{Result, StatsError};
use crate::validation::require_open_unit;

fn invalid<E: Display>(err: E) -> StatsError {
    StatsError::InvalidValue(err.to_string())
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(invalid)
}

/// Standard normal CDF Φ(z).
pub fn normal_cdf(z: f64) -> Result<f64> {
    Ok(standard_normal()?.cdf(z))
}

/// Standard normal quantile Φ⁻¹(p), `0 < p < 1`.
pub fn inverse_normal(p: f64) -> Result<f64> {
    require_open_unit(p, "probability")?;
    Ok(standard_normal()?.inverse_cdf(p))
}

/// Student's t CDF with `df` degrees of freedom.
pub fn t_cdf(t: f64, df: f64) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df).map_err(invalid)?;
    Ok(dist.cdf(t))
}

/// F CDF with (`df1`, `df2`) degrees of freedom.
pub fn f_cdf(f: f64, df1: f64, df2: f64) -> Result<f64> {
    let dist = FisherSnedecor::new(df1, df2).map_err(invalid)?;
    Ok(dist.cdf(f))
}

/// Chi-square upper tail P(X ≥ x).
pub fn chi_square_sf(x: f64, df: f64) -> Result<f64> {
    let dist = ChiSquared::new(df).map_err(invalid)?;
    Ok(dist.sf(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_values() {
        assert_abs_diff_eq!(normal_cdf(0.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(inverse_normal(0.975).unwrap(), 1.959963984540054, epsilon = 1e-8);
        assert_abs_diff_eq!(t_cdf(0.0, 5.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(chi_square_sf(3.841458820694124, 1.0).unwrap(), 0.05, epsilon = 1e-8);
        // F(1, n) at t² equals the two-sided t probability
        let t = 2.0;
        let df = 8.0;
        let two_sided = 2.0 * t_cdf(t, df).unwrap() - 1.0;
        assert_abs_diff_eq!(f_cdf(t * t, 1.0, df).unwrap(), two_sided, epsilon = 1e-8);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(t_cdf(1.0, 0.0).is_err());
        assert!(f_cdf(1.0, -1.0, 3.0).is_err());
        assert!(chi_square_sf(1.0, 0.0).is_err());
        assert!(inverse_normal(1.0).is_err());
    }

    #[test]
    fn test_normal_cdf_approximation_error() {
        for i in -40..=40 {
            let z = i as f64 / 10.0;
            let approx = distributions::normal_cdf(z);
            assert_abs_diff_eq!(approx, normal_cdf(z).unwrap(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_inverse_normal_approximation_error() {
        // The approximation is the true quantile minus y = √(-2·ln(1-p))
        for &p in &[0.5, 0.8, 0.95, 0.975, 0.99, 0.999] {
            let y = (-2.0 * (1.0f64 - p).ln()).sqrt();
            let approx = distributions::inverse_normal(p).unwrap();
            let exact = inverse_normal(p).unwrap();
            assert_abs_diff_eq!(approx + y, exact, epsilon = 1e-6);
            assert!(approx < exact);
        }
        assert_abs_diff_eq!(
            distributions::inverse_normal(0.975).unwrap(),
            1.959963984540054 - 2.716203017,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_wilson_hilferty_approximation_error() {
        for &(x, df) in &[(3.841, 1.0), (5.991, 2.0), (12.32, 3.0), (10.0, 5.0), (20.0, 10.0)] {
            let approx = distributions::chi_square_p_value(x, df).unwrap();
            assert_abs_diff_eq!(approx, chi_square_sf(x, df).unwrap(), epsilon = 0.005);
        }
    }
}
