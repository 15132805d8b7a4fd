//! Configuration file loading.
//!
//! The file is TOML and may be shared with other tools of the indexer
//! (sections this crate does not know about are ignored):
//!
//! ```toml
//! [database]
//! url = "sqlite://assets/pairs.db"
//!
//! [logger]
//! level = "info"
//! path = "logs/pairviz.log"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logger: LoggerConfig,
}

/// Database connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    /// A tracing level or `EnvFilter` directive.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log to this file instead of stderr.
    pub path: Option<PathBuf>,
}

fn default_level() -> String {
    "pairviz=info".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            path: None,
        }
    }
}

impl FromStr for Config {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| CoreError::config(e.to_string()))
    }
}

impl Config {
    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        content.parse()
    }
}
