//----------------------------------------
// correction mod
//----------------------------------------
pub mod bonferroni;
