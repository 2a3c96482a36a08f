//! One-way analysis of variance.
//!
//! Partitions the total variation of k pooled groups into a between-group
//! part and a within-group part:
//!
//! ```text
//! SSB = Σᵢ nᵢ(x̄ᵢ - x̄)²        df_between = k - 1
//! SSW = Σᵢ Σⱼ (xᵢⱼ - x̄ᵢ)²     df_within  = N - k
//! F   = (SSB / df_between) / (SSW / df_within)
//! ```
//!
//! and reads the p-value off `1 - f_distribution_probability(F, ...)`.

use crate::descriptive::sum_squared_deviations;
use crate::distributions::f_distribution_probability;
use crate::error::{Result, StatsError};
use crate::validation::require_sample;

use super::{check_p_value, is_significant};

/// Full ANOVA table for a one-way design.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnovaResult {
    pub f_statistic: f64,
    pub p_value: f64,
    pub grand_mean: f64,
    /// Mean of each group, in input order.
    pub group_means: Vec<f64>,
    pub ss_between: f64,
    pub ss_within: f64,
    pub ss_total: f64,
    pub df_between: usize,
    pub df_within: usize,
    pub df_total: usize,
    pub ms_between: f64,
    pub ms_within: f64,
    pub is_significant: bool,
}

/// One-way ANOVA across `groups`.
///
/// # Errors
/// - `InsufficientData` for fewer than two groups
/// - `EmptyInput` if any group is empty
/// - `DegenerateInput` when N ≤ k (no within-group degrees of freedom) or
///   every group is internally constant (MSW = 0)
pub fn one_way_anova<S: AsRef<[f64]>>(groups: &[S]) -> Result<AnovaResult> {
    let k = groups.len();
    if k < 2 {
        return Err(StatsError::InsufficientData(format!(
            "ANOVA needs at least 2 groups, got {k}"
        )));
    }
    for (i, group) in groups.iter().enumerate() {
        require_sample(group.as_ref(), &format!("group {i}"))?;
    }

    let total_n: usize = groups.iter().map(|g| g.as_ref().len()).sum();
    if total_n <= k {
        return Err(StatsError::DegenerateInput(format!(
            "ANOVA needs more observations than groups ({total_n} observations, {k} groups)"
        )));
    }

    let grand_mean = groups
        .iter()
        .flat_map(|g| g.as_ref().iter())
        .sum::<f64>()
        / total_n as f64;

    let group_means: Vec<f64> = groups
        .iter()
        .map(|g| {
            let g = g.as_ref();
            g.iter().sum::<f64>() / g.len() as f64
        })
        .collect();
    log::trace!("ANOVA group means: {group_means:?}, grand mean {grand_mean}");

    let ss_between: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, &m)| g.as_ref().len() as f64 * (m - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, &m)| sum_squared_deviations(g.as_ref(), m))
        .sum();

    let df_between = k - 1;
    let df_within = total_n - k;
    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;
    if ms_within == 0.0 {
        return Err(StatsError::DegenerateInput(
            "no variation within groups; the F statistic is undefined".to_string(),
        ));
    }

    let f_statistic = ms_between / ms_within;
    let p_value =
        1.0 - f_distribution_probability(f_statistic, df_between as f64, df_within as f64)?;

    log::debug!("ANOVA: F({df_between}, {df_within}) = {f_statistic:.4}, p = {p_value:.4}");
    check_p_value("ANOVA", p_value);

    Ok(AnovaResult {
        f_statistic,
        p_value,
        grand_mean,
        group_means,
        ss_between,
        ss_within,
        ss_total: ss_between + ss_within,
        df_between,
        df_within,
        df_total: total_n - 1,
        ms_between,
        ms_within,
        is_significant: is_significant(p_value),
    })
}
