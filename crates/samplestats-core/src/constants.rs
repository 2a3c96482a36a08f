// =============================================================================
// Numerical Constants
// =============================================================================
//
// Thresholds and approximation coefficients shared across the crate.
//
// The coefficient tables below define the approximations used for every
// p-value and critical value the engine produces. Changing any of them
// changes published results, so treat them as part of the public contract.
//
// =============================================================================

/// Significance level used by every hypothesis test.
pub const ALPHA: f64 = 0.05;

/// Confidence level used when a caller has no specific requirement.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Number of terms summed by the incomplete beta series.
pub const BETA_SERIES_TERMS: usize = 100;

/// |skewness| above this bound is reported as skewed rather than symmetric.
pub const SKEWNESS_SYMMETRY_BOUND: f64 = 0.5;

// -----------------------------------------------------------------------------
// Normal CDF (Abramowitz & Stegun 26.2.17)
// -----------------------------------------------------------------------------

/// Scale applied to |z| when forming t = 1 / (1 + P·|z|).
pub const NORMAL_CDF_P: f64 = 0.2316419;

/// Standard normal density at zero, 1/√(2π), truncated to seven places.
pub const NORMAL_PDF_SCALE: f64 = 0.3989423;

/// Polynomial coefficients b1..b5 in t.
pub const NORMAL_CDF_B: [f64; 5] = [0.3193815, -0.3565638, 1.781478, -1.821256, 1.330274];

// -----------------------------------------------------------------------------
// Inverse normal (Odeh & Evans rational approximation)
// -----------------------------------------------------------------------------

/// Numerator coefficients, constant term first.
pub const INVERSE_NORMAL_A: [f64; 5] = [
    -0.322232431088,
    -1.0,
    -0.342242088547,
    -0.0204231210245,
    -0.0000453642210148,
];

/// Denominator coefficients, constant term first.
pub const INVERSE_NORMAL_B: [f64; 5] = [
    0.099348462606,
    0.588581570495,
    0.531103462366,
    0.10353775285,
    0.0038560700634,
];
