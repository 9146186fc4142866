use clap::Args;

use bench_core::target::{DatabaseTarget, TargetFamily};

#[derive(Args)]
pub struct TargetsArgs {
    /// Filter by family (document, relational)
    #[arg(long)]
    pub family: Option<String>,
}

pub async fn execute(args: TargetsArgs) -> anyhow::Result<()> {
    let filter = match args.family.as_deref() {
        None => None,
        Some("document" | "doc" | "mongo") => Some(TargetFamily::Document),
        Some("relational" | "rel" | "jdbc") => Some(TargetFamily::Relational),
        Some(other) => anyhow::bail!("Unknown family '{other}' (expected document or relational)"),
    };

    println!("{:<22} {}", "TARGET", "FAMILY");
    println!("{}", "-".repeat(34));

    for target in DatabaseTarget::ALL {
        if filter.is_some_and(|f| f != target.family()) {
            continue;
        }
        println!("{:<22} {}", target, target.family());
    }

    Ok(())
}
