use std::fmt;

use thiserror::Error;

use crate::target::DatabaseTarget;

/// Document-store accessors that are gated on the target's family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentAccessor {
    ConnectionString,
    DatabaseName,
}

impl fmt::Display for DocumentAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionString => write!(f, "document connection string"),
            Self::DatabaseName => write!(f, "document database name"),
        }
    }
}

/// A document accessor was asked for on a relational target.
///
/// This is a caller bug, not a transient condition: it is never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("target {target} has no {accessor}")]
pub struct IncompatibleTargetError {
    pub target: DatabaseTarget,
    pub accessor: DocumentAccessor,
}

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown database target: {0}")]
    UnknownTarget(String),

    #[error(transparent)]
    IncompatibleTarget(#[from] IncompatibleTargetError),
}

pub type BenchResult<T> = Result<T, BenchError>;
