//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to compute the number of subjects needed
//! per group in an A/B (or A/B/n) experiment, given an assumed effect size,
//! a significance level and a target power. Continuous outcomes are sized
//! for a two-sample comparison of means and binary outcomes for a
//! two-proportion z-test. Designs with more than two groups are corrected
//! for all pairwise comparisons with the Bonferroni method.
//!
//! ```
//! use abcompute::compute::{DesignParameters, group_size_for_mean_comparison};
//!
//! let n = group_size_for_mean_comparison(4.0, 1.0, 0.05, 0.8, 2).unwrap();
//! assert_eq!(n, 63);
//!
//! let params = DesignParameters::default().with_n_groups(4).unwrap();
//! assert_eq!(params.mean_comparison_group_size(4.0, 1.0).unwrap(), 97);
//! ```

/// This module houses the public API for sizing experiments
pub mod compute;
mod correction;
mod design;
/// This module contains error types
pub mod error;
mod normal;
mod sample_size;

pub use compute::{group_size_for_mean_comparison, group_size_for_proportion_comparison};
pub use error::AbcomputeErr;
