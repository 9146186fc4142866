use clap::Subcommand;

pub mod plan;
pub mod resolve;
pub mod targets;
pub mod validate;

#[derive(Subcommand)]
pub enum Commands {
    /// List every database target and its connection family
    Targets(targets::TargetsArgs),
    /// Print the connection parameters a target resolves to
    Resolve(resolve::ResolveArgs),
    /// Validate a config file without resolving anything
    Validate(validate::ValidateArgs),
    /// Enumerate benchmark runs with their resolved connections
    Plan(plan::PlanArgs),
}
