//----------------------------------------
// Crate error type
//----------------------------------------
use thiserror::Error;

pub use crate::design::error::ParameterErr;
pub use crate::normal::error::NormalDistErr;
pub use crate::sample_size::error::DegenerateInputErr;

#[derive(Error, Debug, PartialEq)]
pub enum AbcomputeErr {
    #[error("invalid parameter: {0}")]
    InvalidParameter(ParameterErr),
    #[error("degenerate input: {0}")]
    DegenerateInput(DegenerateInputErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
}
