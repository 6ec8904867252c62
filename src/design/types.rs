//----------------------------------------
// design mod types
//----------------------------------------
use crate::design::validate::check_test_parameters;
use crate::error::AbcomputeErr;
use crate::sample_size::{
    mean_comparison::mean_comparison, proportion_comparison::proportion_comparison,
    types::SampleSizeCalculation,
};

/// Parameters shared by every sizing calculation: the family-wise
/// significance level, the target power, and how many groups will be
/// compared pairwise.
///
/// The default is a two-arm design at alpha = 0.05 with 80% power. Every
/// constructor validates, so a `DesignParameters` always satisfies
/// 0 < alpha < power < 1 and n_groups >= 2. Builder methods check the
/// updated design as a whole; when raising alpha above the current power,
/// set the power first.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DesignParameters {
    alpha: f64,
    power: f64,
    n_groups: u64,
}

impl Default for DesignParameters {
    fn default() -> Self {
        DesignParameters {
            alpha: 0.05,
            power: 0.8,
            n_groups: 2,
        }
    }
}

impl DesignParameters {
    pub fn new(alpha: f64, power: f64, n_groups: u64) -> Result<Self, AbcomputeErr> {
        check_test_parameters(alpha, power, n_groups)?;
        Ok(DesignParameters {
            alpha,
            power,
            n_groups,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn n_groups(&self) -> u64 {
        self.n_groups
    }

    pub fn with_alpha(self, alpha: f64) -> Result<Self, AbcomputeErr> {
        DesignParameters::new(alpha, self.power, self.n_groups)
    }

    pub fn with_power(self, power: f64) -> Result<Self, AbcomputeErr> {
        DesignParameters::new(self.alpha, power, self.n_groups)
    }

    pub fn with_n_groups(self, n_groups: u64) -> Result<Self, AbcomputeErr> {
        DesignParameters::new(self.alpha, self.power, n_groups)
    }

    /// Per-group sample size for detecting a difference `delta` in means
    /// between any two groups, given common outcome variance `variance`
    pub fn mean_comparison_group_size(&self, variance: f64, delta: f64) -> Result<u64, AbcomputeErr> {
        Ok(mean_comparison(variance, delta, self)?.group_size)
    }

    /// Per-group sample size for detecting a change from proportion `p1`
    /// to proportion `p2` between any two groups
    pub fn proportion_comparison_group_size(&self, p1: f64, p2: f64) -> Result<u64, AbcomputeErr> {
        Ok(proportion_comparison(p1, p2, self)?.group_size)
    }

    pub fn mean_comparison(
        &self,
        variance: f64,
        delta: f64,
    ) -> Result<SampleSizeCalculation, AbcomputeErr> {
        mean_comparison(variance, delta, self)
    }

    pub fn proportion_comparison(
        &self,
        p1: f64,
        p2: f64,
    ) -> Result<SampleSizeCalculation, AbcomputeErr> {
        proportion_comparison(p1, p2, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::error::ParameterErr;

    #[test]
    fn default_design() {
        let params = DesignParameters::default();
        assert_eq!(params.alpha(), 0.05);
        assert_eq!(params.power(), 0.8);
        assert_eq!(params.n_groups(), 2);
        assert_eq!(DesignParameters::new(0.05, 0.8, 2).unwrap(), params);
    }

    #[test]
    fn builder_overrides() {
        let params = DesignParameters::default()
            .with_alpha(0.01)
            .and_then(|p| p.with_power(0.9))
            .and_then(|p| p.with_n_groups(3))
            .expect("failed to build design");
        assert_eq!(params, DesignParameters::new(0.01, 0.9, 3).unwrap());
    }

    #[test]
    fn builders_reject_invalid_design() {
        let params = DesignParameters::default();
        assert_eq!(
            params.with_n_groups(1),
            Err(AbcomputeErr::InvalidParameter(ParameterErr::TooFewGroups(1)))
        );
        assert_eq!(
            params.with_power(0.01),
            Err(AbcomputeErr::InvalidParameter(ParameterErr::BadPower {
                power: 0.01,
                alpha: 0.05
            }))
        );
        // alpha above the current power of 0.8
        assert!(params.with_alpha(0.9).is_err());
        assert!(params.with_power(0.95).unwrap().with_alpha(0.9).is_ok());
    }

    #[test]
    fn new_rejects_invalid_design() {
        assert_eq!(
            DesignParameters::new(0.05, 0.8, 1),
            Err(AbcomputeErr::InvalidParameter(ParameterErr::TooFewGroups(1)))
        );
        assert!(DesignParameters::new(0.0, 0.8, 2).is_err());
        assert!(DesignParameters::new(f64::NAN, 0.8, 2).is_err());
        assert!(DesignParameters::new(0.05, 0.8, 2).is_ok());
    }

    #[test]
    fn group_size_methods() {
        let params = DesignParameters::default();
        assert_eq!(params.mean_comparison_group_size(4., 1.).unwrap(), 63);
        assert_eq!(params.proportion_comparison_group_size(0.1, 0.2).unwrap(), 199);
    }

    #[test]
    fn breakdown_methods() {
        let params = DesignParameters::default().with_n_groups(3).unwrap();
        let calc = params
            .mean_comparison(4., 1.)
            .expect("failed to compute mean comparison");
        assert_eq!(calc.n_comparisons, 3);
        assert_eq!(calc.group_size, 84);
        let calc = params
            .proportion_comparison(0.3, 0.5)
            .expect("failed to compute proportion comparison");
        assert_eq!(calc.group_size, 125);
    }
}
