//----------------------------------------
// sample_size mod
//----------------------------------------
mod critical_values;
pub mod error;
pub mod mean_comparison;
pub mod proportion_comparison;
pub mod types;
