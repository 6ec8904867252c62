use tracing::debug;

use crate::design::{types::DesignParameters, validate::check_proportion};
use crate::error::AbcomputeErr;
use crate::sample_size::critical_values::{CriticalValues, ceil_group_size};
use crate::sample_size::error::DegenerateInputErr;
use crate::sample_size::types::{EndpointType, SampleSizeCalculation};

/// Computes the sample size per group required to compare `n_groups`
/// proportions pairwise with the given power at significance level `alpha`,
/// using the two-proportion z-test with pooled variance under the null
///
/// `p1` is the baseline proportion and `p2` the proportion we aim to detect
/// as different from it; the result is symmetric in the two. With more than
/// two groups, alpha is Bonferroni-corrected over all C(n_groups, 2)
/// pairwise tests. Equal proportions are reported as
/// [`DegenerateInputErr::EqualProportions`].
pub fn group_size_for_proportion_comparison(
    p1: f64,
    p2: f64,
    alpha: f64,
    power: f64,
    n_groups: u64,
) -> Result<u64, AbcomputeErr> {
    let params = DesignParameters::new(alpha, power, n_groups)?;
    Ok(proportion_comparison(p1, p2, &params)?.group_size)
}

/// Same as [`group_size_for_proportion_comparison`], returning every
/// intermediate quantity of the calculation
pub fn proportion_comparison(
    p1: f64,
    p2: f64,
    params: &DesignParameters,
) -> Result<SampleSizeCalculation, AbcomputeErr> {
    check_proportion(p1)?;
    check_proportion(p2)?;
    let CriticalValues {
        n_comparisons,
        adjusted_alpha,
        z_alpha,
        z_power,
    } = CriticalValues::new(params)?;
    if p1 == p2 {
        return Err(DegenerateInputErr::EqualProportions(p1).into());
    }

    let p_bar = (p1 + p2) / 2.0;
    let q_bar = 1.0 - p_bar;
    let delta = (p2 - p1).abs();
    // Standard error under H0 (pooled) and under H1 (unpooled)
    let se_null = (2.0 * p_bar * q_bar).sqrt();
    let se_alt = (p1 * (1.0 - p1) + p2 * (1.0 - p2)).sqrt();
    let raw_group_size = ((z_alpha * se_null + z_power * se_alt) / delta).powi(2);
    let group_size = ceil_group_size(raw_group_size)?;
    debug!(p1, p2, raw_group_size, group_size, "proportion comparison group size");

    Ok(SampleSizeCalculation {
        endpoint: EndpointType::Binary,
        n_groups: params.n_groups(),
        n_comparisons,
        adjusted_alpha,
        z_alpha,
        z_power,
        raw_group_size,
        group_size,
    })
}
