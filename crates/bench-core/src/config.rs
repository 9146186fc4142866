use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{BenchError, BenchResult};
use crate::run::RunMatrix;

/// Top-level config file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default)]
    pub connections: ConnectionConfig,
    #[serde(default)]
    pub runs: RunMatrix,
}

/// Connection settings for every target family. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_mongo_native")]
    pub mongo_native: DocumentEndpoint,
    #[serde(default = "default_oracle_mongo_api")]
    pub oracle_mongo_api: DocumentEndpoint,
    #[serde(default)]
    pub oracle_jdbc: RelationalEndpoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEndpoint {
    pub uri: String,
    pub database: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationalEndpoint {
    pub url: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            mongo_native: default_mongo_native(),
            oracle_mongo_api: default_oracle_mongo_api(),
            oracle_jdbc: RelationalEndpoint::default(),
        }
    }
}

impl Default for RelationalEndpoint {
    fn default() -> Self {
        Self {
            url: "jdbc:oracle:thin:@localhost:1521/helix".into(),
            username: "ADMIN".into(),
            password: "Welcome_12345!".into(),
            max_pool_size: default_max_pool_size(),
        }
    }
}

impl fmt::Debug for RelationalEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationalEndpoint")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"********")
            .field("max_pool_size", &self.max_pool_size)
            .finish()
    }
}

fn default_mongo_native() -> DocumentEndpoint {
    DocumentEndpoint {
        uri: "mongodb://localhost:27017/?replicaSet=rs0&w=1&journal=true".into(),
        database: "helix".into(),
    }
}

fn default_oracle_mongo_api() -> DocumentEndpoint {
    DocumentEndpoint {
        uri: "mongodb://localhost:27018".into(),
        database: "helix".into(),
    }
}

fn default_max_pool_size() -> u32 {
    5
}

impl BenchConfig {
    pub fn from_file(path: &Path) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BenchError::Config(format!("Cannot read {}: {e}", path.display())))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> BenchResult<Self> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| BenchError::Config(format!("Invalid YAML: {e}")))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to built-in defaults.
    pub fn load(path: Option<&Path>) -> BenchResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> BenchResult<()> {
        self.connections.validate()?;
        self.runs.validate()
    }
}

impl ConnectionConfig {
    pub fn validate(&self) -> BenchResult<()> {
        self.mongo_native.validate("mongo_native")?;
        self.oracle_mongo_api.validate("oracle_mongo_api")?;
        self.oracle_jdbc.validate("oracle_jdbc")
    }
}

impl DocumentEndpoint {
    fn validate(&self, section: &str) -> BenchResult<()> {
        require_non_empty(section, "uri", &self.uri)?;
        require_non_empty(section, "database", &self.database)?;
        if !(self.uri.starts_with("mongodb://") || self.uri.starts_with("mongodb+srv://")) {
            return Err(BenchError::Config(format!(
                "{section}.uri must start with mongodb:// or mongodb+srv://, got '{}'",
                self.uri
            )));
        }
        Ok(())
    }
}

impl RelationalEndpoint {
    fn validate(&self, section: &str) -> BenchResult<()> {
        require_non_empty(section, "url", &self.url)?;
        require_non_empty(section, "username", &self.username)?;
        if !self.url.starts_with("jdbc:") {
            return Err(BenchError::Config(format!(
                "{section}.url must start with jdbc:, got '{}'",
                self.url
            )));
        }
        if self.max_pool_size == 0 {
            return Err(BenchError::Config(format!(
                "{section}.max_pool_size must be at least 1"
            )));
        }
        Ok(())
    }
}

fn require_non_empty(section: &str, field: &str, value: &str) -> BenchResult<()> {
    if value.trim().is_empty() {
        return Err(BenchError::Config(format!("{section}.{field} must not be empty")));
    }
    Ok(())
}
