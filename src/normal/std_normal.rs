use crate::error::AbcomputeErr;
use crate::normal::error::NormalDistErr;
use statrs::distribution::{ContinuousCDF, Normal};

/// Inverse CDF of the standard normal distribution; p must lie in the open
/// interval (0, 1)
pub fn std_normal_quantile(p: f64) -> Result<f64, AbcomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    Ok(Normal::standard().inverse_cdf(p))
}
