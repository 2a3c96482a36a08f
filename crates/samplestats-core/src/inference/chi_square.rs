//! Chi-square tests on count data.
//!
//! Independence: for an r × c table of observed counts,
//!
//! ```text
//! expected[i][j] = row_total[i] · column_total[j] / total
//! χ²             = Σ (observed - expected)² / expected
//! df             = (r - 1)(c - 1)
//! ```
//!
//! Goodness of fit: χ² = Σ (o - e)² / e over k categories, df = k - 1.
//!
//! Both read the p-value off the Wilson–Hilferty approximation.

use ndarray::{Array2, Axis};

use crate::distributions::chi_square_p_value;
use crate::error::{Result, StatsError};
use crate::validation::{require_finite, require_same_len};

use super::{check_p_value, is_significant};

// =============================================================================
// Contingency Table
// =============================================================================

/// Rectangular table of non-negative observed counts.
///
/// Construction validates the shape, so every `ContingencyTable` has at
/// least one row and one column and only finite, non-negative cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContingencyTable {
    counts: Array2<f64>,
}

impl ContingencyTable {
    /// Wrap an existing count matrix.
    pub fn new(counts: Array2<f64>) -> Result<Self> {
        if counts.nrows() == 0 || counts.ncols() == 0 {
            return Err(StatsError::EmptyInput(format!(
                "contingency table has shape {}x{}",
                counts.nrows(),
                counts.ncols()
            )));
        }
        for ((i, j), &v) in counts.indexed_iter() {
            if !v.is_finite() {
                return Err(StatsError::NonFiniteInput(format!("cell ({i}, {j}) = {v}")));
            }
            if v < 0.0 {
                return Err(StatsError::InvalidValue(format!(
                    "cell ({i}, {j}) = {v}; counts must be non-negative"
                )));
            }
        }
        Ok(Self { counts })
    }

    /// Build a table from row slices, which must all have the same width.
    pub fn from_rows<S: AsRef<[f64]>>(rows: &[S]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if n_rows == 0 || n_cols == 0 {
            return Err(StatsError::EmptyInput(
                "contingency table needs at least one row and one column".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(StatsError::DimensionMismatch(format!(
                    "row {i} has {} columns, expected {n_cols}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }

        let counts = Array2::from_shape_vec((n_rows, n_cols), cells)
            .map_err(|e| StatsError::DimensionMismatch(e.to_string()))?;
        Self::new(counts)
    }

    pub fn counts(&self) -> &Array2<f64> {
        &self.counts
    }

    pub fn n_rows(&self) -> usize {
        self.counts.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.counts.ncols()
    }

    /// Sum of each row.
    pub fn row_totals(&self) -> Vec<f64> {
        self.counts.sum_axis(Axis(1)).to_vec()
    }

    /// Sum of each column.
    pub fn column_totals(&self) -> Vec<f64> {
        self.counts.sum_axis(Axis(0)).to_vec()
    }

    /// Sum of all cells.
    pub fn total(&self) -> f64 {
        self.counts.sum()
    }
}

// =============================================================================
// Test of Independence
// =============================================================================

/// Result of a chi-square test of independence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChiSquareResult {
    pub chi_square: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
    /// Expected counts under independence, same shape as the table.
    pub expected: Array2<f64>,
    pub row_totals: Vec<f64>,
    pub column_totals: Vec<f64>,
    pub total: f64,
    pub is_significant: bool,
}

/// Chi-square test of independence between the row and column factors.
///
/// # Errors
/// `DegenerateInput` when the table has a single row or column (df = 0) or
/// any expected count is zero (an all-zero row or column).
pub fn chi_square_test(table: &ContingencyTable) -> Result<ChiSquareResult> {
    let (n_rows, n_cols) = (table.n_rows(), table.n_cols());
    let degrees_of_freedom = (n_rows - 1) * (n_cols - 1);
    if degrees_of_freedom == 0 {
        return Err(StatsError::DegenerateInput(format!(
            "a {n_rows}x{n_cols} table has zero degrees of freedom"
        )));
    }

    let row_totals = table.row_totals();
    let column_totals = table.column_totals();
    let total = table.total();
    log::trace!(
        "chi-square margins: rows {row_totals:?}, columns {column_totals:?}, total {total}"
    );

    let expected = Array2::from_shape_fn((n_rows, n_cols), |(i, j)| {
        row_totals[i] * column_totals[j] / total
    });
    if let Some(((i, j), _)) = expected.indexed_iter().find(|&(_, &e)| !(e > 0.0)) {
        return Err(StatsError::DegenerateInput(format!(
            "expected count at ({i}, {j}) is zero"
        )));
    }

    let chi_square: f64 = table
        .counts()
        .iter()
        .zip(expected.iter())
        .map(|(&o, &e)| (o - e) * (o - e) / e)
        .sum();
    let p_value = chi_square_p_value(chi_square, degrees_of_freedom as f64)?;

    log::debug!("chi-square: χ²({degrees_of_freedom}) = {chi_square:.4}, p = {p_value:.4}");
    check_p_value("chi-square", p_value);

    Ok(ChiSquareResult {
        chi_square,
        degrees_of_freedom,
        p_value,
        expected,
        row_totals,
        column_totals,
        total,
        is_significant: is_significant(p_value),
    })
}

// =============================================================================
// Goodness of Fit
// =============================================================================

/// Result of a chi-square goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoodnessOfFitResult {
    pub chi_square: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
    pub is_significant: bool,
}

/// Compare observed category counts with expected counts.
///
/// # Arguments
/// * `observed` - Non-negative counts per category
/// * `expected` - Expected counts per category, all > 0
pub fn chi_square_goodness_of_fit(
    observed: &[f64],
    expected: &[f64],
) -> Result<GoodnessOfFitResult> {
    require_same_len(observed, expected)?;
    if observed.len() < 2 {
        return Err(StatsError::InsufficientData(format!(
            "goodness of fit needs at least 2 categories, got {}",
            observed.len()
        )));
    }
    require_finite(observed, "observed")?;
    require_finite(expected, "expected")?;
    if let Some(pos) = observed.iter().position(|&o| o < 0.0) {
        return Err(StatsError::InvalidValue(format!(
            "observed[{pos}] = {}; counts must be non-negative",
            observed[pos]
        )));
    }
    if let Some(pos) = expected.iter().position(|&e| e <= 0.0) {
        return Err(StatsError::DegenerateInput(format!(
            "expected[{pos}] = {}; expected counts must be positive",
            expected[pos]
        )));
    }

    let chi_square: f64 = observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| (o - e) * (o - e) / e)
        .sum();
    let degrees_of_freedom = observed.len() - 1;
    let p_value = chi_square_p_value(chi_square, degrees_of_freedom as f64)?;

    log::debug!("goodness of fit: χ²({degrees_of_freedom}) = {chi_square:.4}, p = {p_value:.4}");

    Ok(GoodnessOfFitResult {
        chi_square,
        degrees_of_freedom,
        p_value,
        is_significant: is_significant(p_value),
    })
}
