// =============================================================================
// Error Types
// =============================================================================
//
// Every fallible function in the library returns `Result<T>`, which is
// `std::result::Result<T, StatsError>`.
//
// The variants fall into three families:
//
//   - SHAPE:      EmptyInput, InsufficientData, DimensionMismatch
//                 The input does not have the structure the formula needs.
//                 Checked before any arithmetic happens.
//
//   - VALUE:      InvalidValue, NonFiniteInput
//                 A parameter is outside its domain (a probability of 1.5,
//                 a negative count, a NaN in a sample).
//
//   - DEGENERATE: DegenerateInput
//                 The shape is fine but the math divides by zero: a constant
//                 series in a correlation, a zero expected cell in a
//                 contingency table, zero degrees of freedom.
//
// Degenerate inputs are reported as errors rather than being allowed to flow
// through as NaN or infinity.
//
// =============================================================================

use thiserror::Error;

/// Errors raised by the statistics engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A sample, group, or table that must contain data was empty.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A sample has fewer observations than the formula requires.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Paired sequences or table rows have incompatible lengths.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A parameter is outside its valid domain.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A sample contains NaN or an infinity.
    #[error("Non-finite input: {0}")]
    NonFiniteInput(String),

    /// The computation would divide by zero or is otherwise undefined.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StatsError>;
