//----------------------------------------
// normal distribution errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
}

impl From<NormalDistErr> for AbcomputeErr {
    fn from(e: NormalDistErr) -> Self {
        AbcomputeErr::NormalDist(e)
    }
}
