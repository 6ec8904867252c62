use tracing::debug;

use crate::correction::bonferroni::{bonferroni_alpha, pairwise_comparisons};
use crate::design::types::DesignParameters;
use crate::error::AbcomputeErr;
use crate::normal::std_normal::std_normal_quantile;
use crate::sample_size::error::DegenerateInputErr;

/// Normal quantiles shared by every two-sided pairwise test in the design
#[derive(Debug, Clone, Copy)]
pub(crate) struct CriticalValues {
    pub n_comparisons: u64,
    pub adjusted_alpha: f64,
    pub z_alpha: f64,
    pub z_power: f64,
}

impl CriticalValues {
    pub fn new(params: &DesignParameters) -> Result<Self, AbcomputeErr> {
        let n_comparisons = pairwise_comparisons(params.n_groups());
        let adjusted_alpha = bonferroni_alpha(params.alpha(), params.n_groups())?;

        // Two-sided test: split the adjusted alpha between both tails.
        // z_{1 - a/2} = -z_{a/2}, and the lower tail keeps full precision
        // where 1 - a/2 would round to 1
        let tail = adjusted_alpha / 2.0;
        if tail == 0.0 {
            return Err(DegenerateInputErr::NegligibleAlpha(adjusted_alpha).into());
        }
        let z_alpha = -std_normal_quantile(tail)?;
        let z_power = std_normal_quantile(params.power())?;
        debug!(
            n_comparisons,
            adjusted_alpha, z_alpha, z_power, "computed critical values"
        );

        Ok(CriticalValues {
            n_comparisons,
            adjusted_alpha,
            z_alpha,
            z_power,
        })
    }
}

/// Rounds a group size up to the next whole subject; at least one subject
/// is always needed
pub(crate) fn ceil_group_size(raw_group_size: f64) -> Result<u64, AbcomputeErr> {
    let group_size = raw_group_size.ceil().max(1.0);
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if !group_size.is_finite() || group_size >= u64::MAX as f64 {
        return Err(DegenerateInputErr::UnboundedGroupSize(raw_group_size).into());
    }
    Ok(group_size as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_critical_values() {
        let cv = CriticalValues::new(&DesignParameters::default())
            .expect("failed to compute critical values");
        assert_eq!(cv.n_comparisons, 1);
        assert!((cv.adjusted_alpha - 0.05).abs() < 1e-12);
        assert!((cv.z_alpha - 1.959964).abs() < 0.00001);
        assert!((cv.z_power - 0.841621).abs() < 0.00001);
    }

    #[test]
    fn more_groups_larger_z_alpha() {
        let two = CriticalValues::new(&DesignParameters::default()).unwrap();
        let four = CriticalValues::new(&DesignParameters::default().with_n_groups(4).unwrap()).unwrap();
        assert_eq!(four.n_comparisons, 6);
        assert!(four.z_alpha > two.z_alpha);
        assert_eq!(four.z_power, two.z_power);
    }

    #[test]
    fn ceiling() {
        assert_eq!(ceil_group_size(62.79).unwrap(), 63);
        assert_eq!(ceil_group_size(63.0).unwrap(), 63);
        assert_eq!(ceil_group_size(0.2).unwrap(), 1);
    }

    #[test]
    fn underflowed_size_is_one_subject() {
        assert_eq!(ceil_group_size(0.0).unwrap(), 1);
        assert_eq!(ceil_group_size(f64::MIN_POSITIVE).unwrap(), 1);
    }

    #[test]
    fn huge_group_count_keeps_precision() {
        let params = DesignParameters::default()
            .with_n_groups(1_000_000_000)
            .unwrap();
        let cv = CriticalValues::new(&params).expect("failed to compute critical values");
        assert_eq!(cv.n_comparisons, 499_999_999_500_000_000);
        // 1 - adjusted_alpha / 2 is exactly 1.0 in f64 here
        assert_eq!(1.0 - cv.adjusted_alpha / 2.0, 1.0);
        assert!(cv.z_alpha.is_finite());
        assert!(cv.z_alpha > 9.0 && cv.z_alpha < 9.5);
    }

    #[test]
    fn negligible_alpha() {
        let params = DesignParameters::default()
            .with_power(0.8)
            .unwrap()
            .with_alpha(5e-324)
            .unwrap()
            .with_n_groups(3)
            .unwrap();
        assert!(matches!(
            CriticalValues::new(&params),
            Err(AbcomputeErr::DegenerateInput(
                DegenerateInputErr::NegligibleAlpha(_)
            ))
        ));
    }

    #[test]
    fn unbounded_group_size() {
        assert_eq!(
            ceil_group_size(f64::INFINITY),
            Err(AbcomputeErr::DegenerateInput(
                DegenerateInputErr::UnboundedGroupSize(f64::INFINITY)
            ))
        );
        assert!(ceil_group_size(1e30).is_err());
    }
}
