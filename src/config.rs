// src/config.rs
use dotenv::dotenv;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_WORK_FACTOR: u32 = 12;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Process-wide server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bcrypt_work_factor: u32,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bcrypt_work_factor = match lookup("BCRYPT_WORK_FACTOR") {
            Some(raw) => parse_work_factor(&raw)?,
            None => DEFAULT_WORK_FACTOR,
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr =
            bind_raw
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                    name: "BIND_ADDR",
                    value: bind_raw.clone(),
                    reason: e.to_string(),
                })?;

        let max_connections: u32 = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Config {
            database_url,
            bcrypt_work_factor,
            bind_addr,
            max_connections,
        })
    }
}

fn parse_work_factor(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: "BCRYPT_WORK_FACTOR",
        value: raw.to_string(),
        reason,
    };
    let cost: u32 = raw
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    // bcrypt only accepts costs in 4..=31
    if !(4..=31).contains(&cost) {
        return Err(invalid("expected a value between 4 and 31".to_string()));
    }
    Ok(cost)
}

/// Endpoints the client views talk to.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub recipe_api_url: String,
    pub auth_api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ClientConfig {
            recipe_api_url: lookup("RECIPE_API_URL")
                .unwrap_or_else(|| "http://localhost:3001".to_string()),
            auth_api_url: lookup("AUTH_API_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
        }
    }
}
