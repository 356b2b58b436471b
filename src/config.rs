//! Runtime configuration from environment variables
//!
//! `.env` files are loaded by `main` through dotenvy before this runs.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub static_dir: PathBuf,
    pub session_idle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            catalog_path: PathBuf::from("data/catalog.json"),
            static_dir: PathBuf::from("static"),
            session_idle: Duration::from_secs(30 * 60),
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a lookup function, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?,
            None => defaults.port,
        };

        let session_idle = match lookup("SESSION_IDLE_MINUTES") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .map(|minutes| Duration::from_secs(minutes * 60))
                .ok_or(ConfigError::InvalidValue {
                    key: "SESSION_IDLE_MINUTES",
                    value,
                })?,
            None => defaults.session_idle,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            catalog_path: lookup("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            session_idle,
        })
    }

    /// Address to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
