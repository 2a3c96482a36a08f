//! Mean, median and mode.

use crate::error::Result;
use crate::validation::require_sample;

use super::sorted_copy;

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    require_sample(data, "sample")?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Middle value of the sorted sample.
///
/// For an even count this is the average of the two middle values.
pub fn median(data: &[f64]) -> Result<f64> {
    require_sample(data, "sample")?;
    Ok(median_sorted(&sorted_copy(data)))
}

pub(crate) fn median_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Every value that occurs with the highest frequency, ascending.
///
/// A sample where each value appears once returns all of its distinct values.
/// Equality is exact, so `0.1 + 0.2` and `0.3` count as different values.
pub fn mode(data: &[f64]) -> Result<Vec<f64>> {
    require_sample(data, "sample")?;
    Ok(mode_sorted(&sorted_copy(data)))
}

pub(crate) fn mode_sorted(sorted: &[f64]) -> Vec<f64> {
    // Run-length encode the sorted values: (value, count)
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &v in sorted {
        match runs.last_mut() {
            Some((last, count)) if *last == v => *count += 1,
            _ => runs.push((v, 1)),
        }
    }

    let max_count = runs.iter().map(|&(_, c)| c).max().unwrap_or(0);
    runs.into_iter()
        .filter(|&(_, c)| c == max_count)
        .map(|(v, _)| v)
        .collect()
}
