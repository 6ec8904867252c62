//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::correction::bonferroni::{bonferroni_alpha, pairwise_comparisons};
pub use crate::design::types::DesignParameters;
pub use crate::normal::std_normal::std_normal_quantile;
pub use crate::sample_size::mean_comparison::{group_size_for_mean_comparison, mean_comparison};
pub use crate::sample_size::proportion_comparison::{
    group_size_for_proportion_comparison, proportion_comparison,
};
pub use crate::sample_size::types::{EndpointType, SampleSizeCalculation};
