use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum DegenerateInputErr {
    #[error("difference in means should be nonzero and finite; got {0}")]
    ZeroMeanDifference(f64),
    #[error("proportions should differ; got p1 = p2 = {0}")]
    EqualProportions(f64),
    #[error("adjusted significance level ({0}) is too small to evaluate")]
    NegligibleAlpha(f64),
    #[error("required group size ({0}) is not representable")]
    UnboundedGroupSize(f64),
}

impl From<DegenerateInputErr> for AbcomputeErr {
    fn from(e: DegenerateInputErr) -> Self {
        AbcomputeErr::DegenerateInput(e)
    }
}
