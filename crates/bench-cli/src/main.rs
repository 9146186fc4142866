use std::path::PathBuf;

use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(
    name = "helix-bench",
    about = "Helix benchmark - resolve connection parameters for document and relational targets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Connection/run config file (YAML). Built-in defaults are used when absent.
    #[arg(long, env = "HELIX_BENCH_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    match cli.command {
        commands::Commands::Targets(args) => commands::targets::execute(args).await,
        commands::Commands::Resolve(args) => commands::resolve::execute(args, config).await,
        commands::Commands::Validate(args) => commands::validate::execute(args).await,
        commands::Commands::Plan(args) => commands::plan::execute(args, config).await,
    }
}
