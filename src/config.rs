//! Runtime configuration read from the environment (and `.env` via dotenvy).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Directory holding the rotated log files served by the API.
pub const LOG_DIRECTORY: &str = "LOG_DIRECTORY";
pub const LOGDASH_HOST: &str = "LOGDASH_HOST";
pub const LOGDASH_PORT: &str = "LOGDASH_PORT";
/// Optional directory for this service's own daily-rolling log files.
pub const LOGDASH_APP_LOG_DIR: &str = "LOGDASH_APP_LOG_DIR";
pub const RUST_LOG: &str = "RUST_LOG";

const DEFAULT_LOG_DIRECTORY: &str = "./logs";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3333;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_directory: PathBuf,
    pub host: String,
    pub port: u16,
    pub app_log_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            app_log_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get(LOGDASH_PORT) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid {LOGDASH_PORT} value: {raw}"))?,
            None => defaults.port,
        };

        Ok(Self {
            log_directory: get(LOG_DIRECTORY).map(PathBuf::from).unwrap_or(defaults.log_directory),
            host: get(LOGDASH_HOST).unwrap_or(defaults.host),
            port,
            app_log_dir: get(LOGDASH_APP_LOG_DIR).map(PathBuf::from),
            log_filter: get(RUST_LOG).unwrap_or(defaults.log_filter),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
