// src/config.rs
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_DATABASE_URL: &str = "sqlite://polls.db?mode=rwc";
const DEFAULT_PORT: u16 = 3030;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),

    #[error("HOST must be a valid IP address, got {0:?}")]
    InvalidHost(String),
}

/// Runtime settings, read from the process environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is fine; the real environment still applies.
        dotenvy::dotenv().ok();

        Self::from_values(
            env::var("DATABASE_URL").ok(),
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("LOG_LEVEL").ok(),
        )
    }

    /// Build from raw setting values; `None` means the variable was unset.
    pub fn from_values(
        database_url: Option<String>,
        host: Option<String>,
        port: Option<String>,
        log_level: Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = match host {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host,
            port,
            log_level: log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
