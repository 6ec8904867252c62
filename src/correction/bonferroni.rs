use crate::design::validate::{check_alpha, check_n_groups};
use crate::error::AbcomputeErr;

/// Number of distinct pairs that can be formed from `n_groups` groups,
/// i.e. C(n_groups, 2). Zero for fewer than two groups; saturates at
/// `u64::MAX`.
pub fn pairwise_comparisons(n_groups: u64) -> u64 {
    let n = u128::from(n_groups);
    let pairs = n * n.saturating_sub(1) / 2;
    u64::try_from(pairs).unwrap_or(u64::MAX)
}

/// Significance level for each pairwise test such that the family-wise
/// false positive rate over all C(n_groups, 2) tests stays at or below
/// `alpha`
pub fn bonferroni_alpha(alpha: f64, n_groups: u64) -> Result<f64, AbcomputeErr> {
    check_alpha(alpha)?;
    check_n_groups(n_groups)?;
    Ok(alpha / pairwise_comparisons(n_groups) as f64)
}
