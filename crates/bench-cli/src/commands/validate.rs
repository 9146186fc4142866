use std::path::PathBuf;

use clap::Args;

use bench_core::config::BenchConfig;

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to config file to validate
    pub config: PathBuf,
}

pub async fn execute(args: ValidateArgs) -> anyhow::Result<()> {
    println!("Validating {}...", args.config.display());

    let config = match BenchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            println!("Validation FAILED");
            eprintln!("  - {e}");
            std::process::exit(1);
        }
    };

    let connections = &config.connections;
    println!("  YAML parsing: OK");
    println!("  mongo_native: {} ({})", connections.mongo_native.uri, connections.mongo_native.database);
    println!(
        "  oracle_mongo_api: {} ({})",
        connections.oracle_mongo_api.uri, connections.oracle_mongo_api.database
    );
    println!(
        "  oracle_jdbc: {} as {} (pool {})",
        connections.oracle_jdbc.url,
        connections.oracle_jdbc.username,
        connections.oracle_jdbc.max_pool_size
    );

    let targets = config.runs.unique_targets();
    println!("  Run targets: {}", targets.len());
    if targets.len() != config.runs.targets.len() {
        tracing::warn!(
            configured = config.runs.targets.len(),
            unique = targets.len(),
            "Duplicate targets in run matrix will be collapsed"
        );
    }
    println!("  Iterations: {}", config.runs.iterations);
    println!("  Duration: {:?} (warmup {:?})", config.runs.duration, config.runs.warmup);

    println!();
    println!("Validation PASSED");
    Ok(())
}
