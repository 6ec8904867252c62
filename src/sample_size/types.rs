//----------------------------------------
// sample_size mod types
//----------------------------------------
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum EndpointType {
    /// Difference in means of a continuous outcome
    Continuous,
    /// Difference in proportions of a binary outcome
    Binary,
}

/// Intermediate quantities and result of a group size calculation
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SampleSizeCalculation {
    pub endpoint: EndpointType,
    pub n_groups: u64,
    /// C(n_groups, 2)
    pub n_comparisons: u64,
    pub adjusted_alpha: f64,
    pub z_alpha: f64,
    pub z_power: f64,
    pub raw_group_size: f64,
    pub group_size: u64,
}

impl SampleSizeCalculation {
    /// Subjects needed across all groups
    pub fn total_sample_size(&self) -> u64 {
        self.group_size.saturating_mul(self.n_groups)
    }
}
