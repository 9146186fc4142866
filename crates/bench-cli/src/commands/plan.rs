use std::path::Path;
use std::sync::Arc;

use clap::Args;

use bench_core::config::BenchConfig;
use bench_core::resolver::ConnectionResolver;
use bench_core::run::RunPlan;

use super::resolve::mask_password;

#[derive(Args)]
pub struct PlanArgs {
    /// Print JSON instead of a table (passwords are always masked)
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: PlanArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let config = BenchConfig::load(config)?;
    let resolver = ConnectionResolver::new(Arc::new(config.connections));
    let mut plan = RunPlan::build(&config.runs, &resolver);

    if args.json {
        for planned in &mut plan.runs {
            mask_password(&mut planned.connection);
        }
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{:<38} {:<22} {:>4}  {}", "RUN", "TARGET", "ITER", "CONNECTION");
    println!("{}", "-".repeat(100));
    for planned in &plan.runs {
        println!(
            "{:<38} {:<22} {:>4}  {}",
            planned.run.id, planned.run.target, planned.run.iteration, planned.connection
        );
    }
    println!();
    println!(
        "{} run(s), {:?} each after {:?} warmup",
        plan.len(),
        config.runs.duration,
        config.runs.warmup
    );

    Ok(())
}
