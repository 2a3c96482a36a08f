// =============================================================================
// Distribution Function Approximations
// =============================================================================
//
// The normal, t, F and chi-square distributions have no elementary closed
// form for their CDFs. The engine uses fixed numerical approximations:
//
//   normal_cdf                   Abramowitz & Stegun 26.2.17 rational
//                                approximation (|error| < 7.5e-8)
//   inverse_normal               A(y)/B(y), quartics in y = √(-2·ln(1-p))
//   incomplete_beta              100-term power series, x^a · Σ xⁱ/(i+a)
//   f_distribution_probability   incomplete_beta(df1/2, df2/2, df1·F/(df1·F+df2))
//   t_distribution_cdf           1 - ½·incomplete_beta(df/2, ½, df/(df+t²))
//   chi_square_p_value           Wilson–Hilferty cube-root transform
//
// ACCURACY
// --------
// normal_cdf and chi_square_p_value track the exact distributions closely for
// moderate arguments. Two approximations do NOT:
//
//   - inverse_normal is the Odeh & Evans ratio without its leading `y` term.
//     It is negative on all of [0, 1) (about -0.756 at p = 0.975), so
//     confidence intervals built on it have a negative margin.
//   - incomplete_beta ignores its `b` parameter and is not regularized, so
//     the t and F values built on it can fall outside [0, 1].
//
// Every test result in this crate is calibrated against these formulas, so
// they are kept as-is.
//
// The `exact` submodule wraps statrs for callers that want true distribution
// values, and is what the accuracy tests compare against.
//
// =============================================================================

mod beta;
mod chi_square;
pub mod exact;
mod normal;

pub use beta::{f_distribution_probability, incomplete_beta, t_distribution_cdf};
pub use chi_square::chi_square_p_value;
pub use normal::{inverse_normal, normal_cdf};
