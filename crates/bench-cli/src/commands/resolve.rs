use std::path::Path;
use std::sync::Arc;

use clap::Args;

use bench_core::config::BenchConfig;
use bench_core::resolver::{ConnectionResolver, ResolvedConnection};
use bench_core::target::DatabaseTarget;

#[derive(Args)]
pub struct ResolveArgs {
    /// Target to resolve, e.g. MONGO_NATIVE or oracle-jdbc
    pub target: DatabaseTarget,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
    /// Include the relational password in JSON output
    #[arg(long, requires = "json")]
    pub show_password: bool,
}

pub async fn execute(args: ResolveArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let config = BenchConfig::load(config)?;
    let resolver = ConnectionResolver::new(Arc::new(config.connections));

    let mut resolved = resolver.resolve(args.target);
    tracing::info!(db_target = %args.target, family = %resolved.family(), "Resolved target");

    if args.json {
        if !args.show_password {
            mask_password(&mut resolved);
        }
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("{:<10} {}", "Target:", args.target);
        println!("{:<10} {}", "Family:", args.target.family());
        println!("{:<10} {resolved}", "Connect:");
    }

    Ok(())
}

pub(crate) fn mask_password(resolved: &mut ResolvedConnection) {
    if let ResolvedConnection::Relational(conn) = resolved {
        conn.password = "********".into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench_core::config::ConnectionConfig;

    #[test]
    fn mask_password_only_touches_relational_connections() {
        let resolver = ConnectionResolver::new(Arc::new(ConnectionConfig::default()));

        let mut relational = resolver.resolve(DatabaseTarget::OracleJdbc);
        mask_password(&mut relational);
        let json = serde_json::to_string(&relational).unwrap();
        assert!(json.contains("\"password\":\"********\""));
        assert!(json.contains("\"family\":\"relational\""));

        let mut document = resolver.resolve(DatabaseTarget::MongoNative);
        let before = document.clone();
        mask_password(&mut document);
        assert_eq!(document, before);
    }
}
