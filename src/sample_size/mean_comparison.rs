use tracing::debug;

use crate::design::{types::DesignParameters, validate::check_variance};
use crate::error::AbcomputeErr;
use crate::sample_size::critical_values::{CriticalValues, ceil_group_size};
use crate::sample_size::error::DegenerateInputErr;
use crate::sample_size::types::{EndpointType, SampleSizeCalculation};

/// Computes the sample size per group required to compare the means of
/// `n_groups` groups pairwise with the given power at significance level
/// `alpha`
///
/// Assumes a normally distributed outcome (a reasonable approximation for
/// large samples) with common variance `variance` in every group. With more
/// than two groups, alpha is Bonferroni-corrected over all C(n_groups, 2)
/// pairwise tests.
///
/// `delta` is the smallest difference in means worth detecting; only its
/// magnitude matters. A zero `delta` can never be detected and is reported
/// as [`DegenerateInputErr::ZeroMeanDifference`].
pub fn group_size_for_mean_comparison(
    variance: f64,
    delta: f64,
    alpha: f64,
    power: f64,
    n_groups: u64,
) -> Result<u64, AbcomputeErr> {
    let params = DesignParameters::new(alpha, power, n_groups)?;
    Ok(mean_comparison(variance, delta, &params)?.group_size)
}

/// Same as [`group_size_for_mean_comparison`], returning every intermediate
/// quantity of the calculation
pub fn mean_comparison(
    variance: f64,
    delta: f64,
    params: &DesignParameters,
) -> Result<SampleSizeCalculation, AbcomputeErr> {
    check_variance(variance)?;
    let CriticalValues {
        n_comparisons,
        adjusted_alpha,
        z_alpha,
        z_power,
    } = CriticalValues::new(params)?;
    if delta == 0.0 || !delta.is_finite() {
        return Err(DegenerateInputErr::ZeroMeanDifference(delta).into());
    }

    //    n = 2 * sigma^2 * (z_{1 - alpha / 2} + z_{power})^2 / delta^2
    let raw_group_size = (2.0 * variance) * (z_alpha + z_power).powi(2) / delta.powi(2);
    let group_size = ceil_group_size(raw_group_size)?;
    debug!(variance, delta, raw_group_size, group_size, "mean comparison group size");

    Ok(SampleSizeCalculation {
        endpoint: EndpointType::Continuous,
        n_groups: params.n_groups(),
        n_comparisons,
        adjusted_alpha,
        z_alpha,
        z_power,
        raw_group_size,
        group_size,
    })
}
