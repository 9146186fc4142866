use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BenchError;

/// Database backend and access mode under benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatabaseTarget {
    MongoNative,
    OracleMongoApi,
    /// Oracle Mongo API issuing queries against duality views.
    OracleMongoApiDv,
    OracleJdbc,
    OracleRelational,
    OracleDualityView,
}

/// Which class of connection parameters a target needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetFamily {
    Document,
    Relational,
}

impl DatabaseTarget {
    pub const ALL: [DatabaseTarget; 6] = [
        Self::MongoNative,
        Self::OracleMongoApi,
        Self::OracleMongoApiDv,
        Self::OracleJdbc,
        Self::OracleRelational,
        Self::OracleDualityView,
    ];

    pub fn family(self) -> TargetFamily {
        match self {
            Self::MongoNative | Self::OracleMongoApi | Self::OracleMongoApiDv => {
                TargetFamily::Document
            }
            Self::OracleJdbc | Self::OracleRelational | Self::OracleDualityView => {
                TargetFamily::Relational
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MongoNative => "MONGO_NATIVE",
            Self::OracleMongoApi => "ORACLE_MONGO_API",
            Self::OracleMongoApiDv => "ORACLE_MONGO_API_DV",
            Self::OracleJdbc => "ORACLE_JDBC",
            Self::OracleRelational => "ORACLE_RELATIONAL",
            Self::OracleDualityView => "ORACLE_DUALITY_VIEW",
        }
    }
}

impl fmt::Display for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseTarget {
    type Err = BenchError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| BenchError::UnknownTarget(s.to_string()))
    }
}

impl fmt::Display for TargetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::Relational => write!(f, "relational"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_partition_targets() {
        let document: Vec<_> = DatabaseTarget::ALL
            .into_iter()
            .filter(|t| t.family() == TargetFamily::Document)
            .collect();
        assert_eq!(
            document,
            vec![
                DatabaseTarget::MongoNative,
                DatabaseTarget::OracleMongoApi,
                DatabaseTarget::OracleMongoApiDv,
            ]
        );
        assert_eq!(
            DatabaseTarget::ALL
                .into_iter()
                .filter(|t| t.family() == TargetFamily::Relational)
                .count(),
            3
        );
    }

    #[test]
    fn display_and_parse_agree() {
        for target in DatabaseTarget::ALL {
            let parsed: DatabaseTarget = target.to_string().parse().unwrap();
            assert_eq!(parsed, target);
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_dashes() {
        assert_eq!(
            "oracle-mongo-api-dv".parse::<DatabaseTarget>().unwrap(),
            DatabaseTarget::OracleMongoApiDv
        );
        assert_eq!(
            " Mongo_Native ".parse::<DatabaseTarget>().unwrap(),
            DatabaseTarget::MongoNative
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "POSTGRES".parse::<DatabaseTarget>().unwrap_err();
        assert!(matches!(err, BenchError::UnknownTarget(ref s) if s == "POSTGRES"));
    }

    #[test]
    fn serde_uses_upper_snake_case() {
        let yaml = serde_yaml::to_string(&DatabaseTarget::OracleDualityView).unwrap();
        assert_eq!(yaml.trim(), "ORACLE_DUALITY_VIEW");
        let back: DatabaseTarget = serde_yaml::from_str("ORACLE_MONGO_API_DV").unwrap();
        assert_eq!(back, DatabaseTarget::OracleMongoApiDv);
    }
}
