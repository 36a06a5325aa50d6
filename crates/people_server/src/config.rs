//! Server configuration from environment variables.
//!
//! # Responsibility
//! - Resolve db path, listen address, and logging settings with defaults.
//!
//! # Invariants
//! - Absent variables mean defaults, never errors.
//! - Only a malformed listen address is a hard failure.

use people_core::default_log_level;
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "PEOPLE_DB_PATH";
pub const ENV_LISTEN_ADDR: &str = "PEOPLE_LISTEN_ADDR";
pub const ENV_LOG_DIR: &str = "PEOPLE_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "PEOPLE_LOG_LEVEL";

const DEFAULT_DB_PATH: &str = "people.db";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub db_path: PathBuf,
    pub listen_addr: SocketAddr,
    /// File logging is enabled only when a directory is configured.
    pub log_dir: Option<String>,
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr { value: String, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidListenAddr { value, message } => {
                write!(f, "invalid {ENV_LISTEN_ADDR} `{value}`: {message}")
            }
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_path = env::var(ENV_DB_PATH)
            .unwrap_or_else(|_| DEFAULT_DB_PATH.to_string())
            .into();

        let listen_raw =
            env::var(ENV_LISTEN_ADDR).unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_raw
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::InvalidListenAddr {
                value: listen_raw.clone(),
                message: err.to_string(),
            })?;

        let log_dir = env::var(ENV_LOG_DIR).ok().filter(|dir| !dir.trim().is_empty());
        let log_level =
            env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| default_log_level().to_string());

        Ok(Self {
            db_path,
            listen_addr,
            log_dir,
            log_level,
        })
    }
}
