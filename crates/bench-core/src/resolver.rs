//! Maps a [`DatabaseTarget`] to the connection values it runs against.
//!
//! Document accessors are gated on the target's family and reject relational
//! targets with [`IncompatibleTargetError`]. Relational accessors are not
//! gated: they return the configured values whatever target the caller is
//! working on.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::config::{ConnectionConfig, DocumentEndpoint};
use crate::error::{DocumentAccessor, IncompatibleTargetError};
use crate::target::{DatabaseTarget, TargetFamily};

#[derive(Debug, Clone)]
pub struct ConnectionResolver {
    config: Arc<ConnectionConfig>,
}

impl ConnectionResolver {
    pub fn new(config: Arc<ConnectionConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// The document endpoint backing `target`, or `None` for relational targets.
    fn document_endpoint(&self, target: DatabaseTarget) -> Option<&DocumentEndpoint> {
        match target {
            DatabaseTarget::MongoNative => Some(&self.config.mongo_native),
            // The duality-view variant only differs in how queries are issued.
            DatabaseTarget::OracleMongoApi | DatabaseTarget::OracleMongoApiDv => {
                Some(&self.config.oracle_mongo_api)
            }
            DatabaseTarget::OracleJdbc
            | DatabaseTarget::OracleRelational
            | DatabaseTarget::OracleDualityView => None,
        }
    }

    pub fn document_connection_string(
        &self,
        target: DatabaseTarget,
    ) -> Result<&str, IncompatibleTargetError> {
        self.document_endpoint(target)
            .map(|endpoint| endpoint.uri.as_str())
            .ok_or(IncompatibleTargetError {
                target,
                accessor: DocumentAccessor::ConnectionString,
            })
    }

    pub fn document_database_name(
        &self,
        target: DatabaseTarget,
    ) -> Result<&str, IncompatibleTargetError> {
        self.document_endpoint(target)
            .map(|endpoint| endpoint.database.as_str())
            .ok_or(IncompatibleTargetError {
                target,
                accessor: DocumentAccessor::DatabaseName,
            })
    }

    pub fn relational_url(&self) -> &str {
        &self.config.oracle_jdbc.url
    }

    pub fn relational_username(&self) -> &str {
        &self.config.oracle_jdbc.username
    }

    pub fn relational_password(&self) -> &str {
        &self.config.oracle_jdbc.password
    }

    pub fn relational_max_pool_size(&self) -> u32 {
        self.config.oracle_jdbc.max_pool_size
    }

    /// Resolve everything `target` needs, choosing accessors by its family.
    pub fn resolve(&self, target: DatabaseTarget) -> ResolvedConnection {
        let resolved = match self.document_endpoint(target) {
            Some(endpoint) => ResolvedConnection::Document {
                uri: endpoint.uri.clone(),
                database: endpoint.database.clone(),
            },
            None => ResolvedConnection::Relational(RelationalConnection {
                url: self.relational_url().to_string(),
                username: self.relational_username().to_string(),
                password: self.relational_password().to_string(),
                max_pool_size: self.relational_max_pool_size(),
            }),
        };
        tracing::debug!(db_target = %target, family = %target.family(), "Resolved connection");
        resolved
    }
}

/// Connection parameters for one target, already split by family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ResolvedConnection {
    Document { uri: String, database: String },
    Relational(RelationalConnection),
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RelationalConnection {
    pub url: String,
    pub username: String,
    pub password: String,
    pub max_pool_size: u32,
}

impl ResolvedConnection {
    pub fn family(&self) -> TargetFamily {
        match self {
            Self::Document { .. } => TargetFamily::Document,
            Self::Relational(_) => TargetFamily::Relational,
        }
    }
}

impl fmt::Debug for RelationalConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationalConnection")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"********")
            .field("max_pool_size", &self.max_pool_size)
            .finish()
    }
}

impl fmt::Display for ResolvedConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document { uri, database } => write!(f, "{uri} (database: {database})"),
            Self::Relational(conn) => write!(
                f,
                "{} (user: {}, password: ********, max pool size: {})",
                conn.url, conn.username, conn.max_pool_size
            ),
        }
    }
}
