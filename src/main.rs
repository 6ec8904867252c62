use abcompute::compute::{
    DesignParameters, group_size_for_mean_comparison, group_size_for_proportion_comparison,
};
use abcompute::error::AbcomputeErr;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), AbcomputeErr> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default tracing subscriber failed");

    let mean_n = group_size_for_mean_comparison(
        4.0,  // variance
        1.0,  // delta
        0.05, // alpha
        0.8,  // power
        2,    // n_groups
    )?;
    info!(group_size = mean_n, "two-arm mean comparison");
    println!("Mean comparison, 2 groups: {mean_n} per group");

    let prop_n = group_size_for_proportion_comparison(
        0.1,  // p1
        0.2,  // p2
        0.05, // alpha
        0.8,  // power
        2,    // n_groups
    )?;
    info!(group_size = prop_n, "two-arm proportion comparison");
    println!("Proportion comparison, 2 groups: {prop_n} per group");

    println!("----------------------------------------");

    let params = DesignParameters::default().with_n_groups(4)?;
    let calc = params.mean_comparison(4.0, 1.0)?;
    println!(
        "Mean comparison, {} groups ({} pairwise tests at alpha = {:.5}): {} per group, {} total",
        calc.n_groups,
        calc.n_comparisons,
        calc.adjusted_alpha,
        calc.group_size,
        calc.total_sample_size()
    );

    Ok(())
}
