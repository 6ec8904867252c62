//----------------------------------------
// Design parameter errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum ParameterErr {
    #[error("variance should be positive and finite; got {0}")]
    BadVariance(f64),
    #[error("alpha should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("power should be in (alpha, 1) = ({alpha}, 1); got {power}")]
    BadPower { power: f64, alpha: f64 },
    #[error("at least 2 groups are needed for a pairwise comparison; got {0}")]
    TooFewGroups(u64),
    #[error("proportions should be in (0, 1); got {0}")]
    BadProportion(f64),
}

impl From<ParameterErr> for AbcomputeErr {
    fn from(e: ParameterErr) -> Self {
        AbcomputeErr::InvalidParameter(e)
    }
}
