//! Configuration module for the gate-pass backend.
//!
//! The storage path and log level may be overridden from the environment.
//! The listening address is fixed.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the service always listens on.
pub const PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON storage document
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("GATEPASS_DB_PATH")
            .unwrap_or_else(|_| "./gatepasses.json".to_string())
            .into();

        let log_level = env::var("GATEPASS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            db_path,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], PORT)),
            log_level,
        }
    }
}
