use crate::design::error::ParameterErr;
use crate::error::AbcomputeErr;
use tracing::trace;

// Checks are negated comparisons so that NaN is rejected

pub fn check_variance(variance: f64) -> Result<(), AbcomputeErr> {
    if !(variance > 0.0 && variance.is_finite()) {
        return Err(ParameterErr::BadVariance(variance).into());
    }
    Ok(())
}

pub fn check_proportion(p: f64) -> Result<(), AbcomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(ParameterErr::BadProportion(p).into());
    }
    Ok(())
}

/// Checks that alpha, power and the number of groups define a valid
/// hypothesis test: 0 < alpha < power < 1 and n_groups >= 2
pub fn check_test_parameters(alpha: f64, power: f64, n_groups: u64) -> Result<(), AbcomputeErr> {
    trace!(alpha, power, n_groups, "validating test parameters");
    check_alpha(alpha)?;
    if !(power > alpha && power < 1.0) {
        return Err(ParameterErr::BadPower { power, alpha }.into());
    }
    check_n_groups(n_groups)
}

pub fn check_alpha(alpha: f64) -> Result<(), AbcomputeErr> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ParameterErr::BadAlpha(alpha).into());
    }
    Ok(())
}

pub fn check_n_groups(n_groups: u64) -> Result<(), AbcomputeErr> {
    if n_groups < 2 {
        return Err(ParameterErr::TooFewGroups(n_groups).into());
    }
    Ok(())
}
