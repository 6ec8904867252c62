//----------------------------------------
// design mod
//----------------------------------------
pub mod error;
pub mod types;
pub(crate) mod validate;
