use smallworld::{analysis::SmallWorld, params::GenerationParameters};
use tracing_subscriber::EnvFilter;

fn main() {
    // Run with `RUST_LOG=smallworld=debug` to follow the pipeline.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    const N: usize = 100;
    const K: usize = 4;
    const SEED: u64 = 7;

    let mut world =
        SmallWorld::new(GenerationParameters::new(N, K, 0.0), Some(SEED)).expect("valid parameters");

    println!("\nSweeping the rewiring probability of a {N}-node network with k = {K}...");
    println!(
        "{:>6} {:>10} {:>9} {:>11} {:>12}",
        "p", "avg. path", "diameter", "clustering", "communities"
    );

    for p in [0.0, 0.001, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0] {
        world
            .regenerate(N, K, p, Some(SEED))
            .expect("valid parameters");

        let metrics = world.metrics();
        println!(
            "{:>6} {:>10.2} {:>9} {:>11.2} {:>12}",
            p,
            metrics.average_path_length,
            metrics.diameter,
            world.clustering_coefficient(),
            world.communities().count()
        );
    }

    let metrics = world.metrics();
    println!(
        "\nLongest shortest path of the random network: {:?}",
        metrics.diameter_path
    );
}
