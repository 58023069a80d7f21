//! Server configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. `UNITCALC_*` environment variables
//! 4. command-line flags (applied by the binary)
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//! search_limit = 10
//! seed_on_start = true
//! log_level = "debug"
//! log_file = "logs/unitcalc.log"
//!
//! [database]
//! backend = "sqlite"
//! connection_string = "data/calculators.db"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use calc_core::db::DbConfig;
use serde::Deserialize;
use thiserror::Error;

pub const ENV_BIND: &str = "UNITCALC_BIND";
pub const ENV_DATABASE: &str = "UNITCALC_DATABASE";
pub const ENV_BACKEND: &str = "UNITCALC_DB_BACKEND";
pub const ENV_SEARCH_LIMIT: &str = "UNITCALC_SEARCH_LIMIT";
pub const ENV_SEED_ON_START: &str = "UNITCALC_SEED_ON_START";
pub const ENV_LOG_LEVEL: &str = "UNITCALC_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "UNITCALC_LOG_FILE";

/// Largest number of results a single search may return.
pub const MAX_SEARCH_LIMIT: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
    pub database: DbConfig,
    pub search_limit: u32,
    /// Load the built-in catalogue when the index is empty.
    pub seed_on_start: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            database: DbConfig::default(),
            search_limit: 20,
            seed_on_start: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, overlaid with `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&text, path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Applies `UNITCALC_*` overrides. `lookup` is normally
    /// `|key| std::env::var(key).ok()`.
    pub fn apply_env<F>(
        &mut self,
        lookup: F,
    ) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(ENV_BIND) {
            self.bind = bind;
        }
        if let Some(database) = lookup(ENV_DATABASE) {
            self.database.connection_string = database;
        }
        if let Some(backend) = lookup(ENV_BACKEND) {
            self.database.backend = backend;
        }
        if let Some(limit) = lookup(ENV_SEARCH_LIMIT) {
            self.search_limit = limit.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_SEARCH_LIMIT.to_string(),
                value: limit.clone(),
            })?;
        }
        if let Some(seed) = lookup(ENV_SEED_ON_START) {
            self.seed_on_start = parse_bool(&seed).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_SEED_ON_START.to_string(),
                value: seed.clone(),
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(file) = lookup(ENV_LOG_FILE) {
            self.log_file = (!file.trim().is_empty()).then(|| PathBuf::from(file));
        }
        Ok(())
    }

    /// Checks values that the file and environment cannot express as types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.search_limit == 0 || self.search_limit > MAX_SEARCH_LIMIT {
            return Err(ConfigError::InvalidValue {
                key: "search_limit".to_string(),
                value: self.search_limit.to_string(),
            });
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind.parse().map_err(|_| ConfigError::InvalidValue {
            key: "bind".to_string(),
            value: self.bind.clone(),
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
