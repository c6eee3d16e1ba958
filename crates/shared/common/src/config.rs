//! Service configuration loaded from environment variables.
//!
//! Every service reads the same set of variables under its own prefix
//! (`USER_SERVICE`, `PRODUCT_SERVICE`, `ORDER_SERVICE`).

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors. All of them are fatal at boot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(String),

    #[error("invalid value {value:?} for {name}")]
    Invalid { name: String, value: String },
}

/// Database pool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

    /// Load only the database settings, for commands that open no listener.
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_source(prefix, &|name: &str| env::var(name).ok())
    }

    fn from_source<F>(prefix: &str, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefixed = format!("{}_DATABASE_URL", prefix);
        let url = lookup(&prefixed)
            .or_else(|| lookup("DATABASE_URL"))
            .ok_or(ConfigError::Missing(prefixed))?;

        Ok(Self {
            url,
            max_connections: optional(
                lookup,
                "DATABASE_MAX_CONNECTIONS",
                Self::DEFAULT_MAX_CONNECTIONS,
            )?,
            min_connections: optional(
                lookup,
                "DATABASE_MIN_CONNECTIONS",
                Self::DEFAULT_MIN_CONNECTIONS,
            )?,
            connect_timeout: Duration::from_secs(optional(
                lookup,
                "DATABASE_CONNECT_TIMEOUT_SECS",
                Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
        })
    }
}

/// Listener settings given on the command line. They win over the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenOverrides {
    pub host: Option<String>,
    pub http_port: Option<u16>,
    pub grpc_port: Option<u16>,
}

impl ListenOverrides {
    fn lookup(&self, prefix: &str, name: &str) -> Option<String> {
        let key = name.strip_prefix(prefix)?.strip_prefix('_')?;
        match key {
            "HOST" => self.host.clone(),
            "HTTP_PORT" => self.http_port.map(|p| p.to_string()),
            "GRPC_PORT" => self.grpc_port.map(|p| p.to_string()),
            _ => None,
        }
    }
}

/// Listener and database configuration of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub http_port: u16,
    pub grpc_port: u16,
    pub database: DatabaseConfig,
}

impl ServiceConfig {
    /// Load configuration, letting command line overrides win.
    pub fn load(prefix: &str, overrides: &ListenOverrides) -> Result<Self, ConfigError> {
        Self::from_source(prefix, |name| {
            overrides
                .lookup(prefix, name)
                .or_else(|| env::var(name).ok())
        })
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_source<F>(prefix: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefixed = |key: &str| format!("{}_{}", prefix, key);
        let database = DatabaseConfig::from_source(prefix, &lookup)?;

        Ok(Self {
            host: lookup(&prefixed("HOST")).unwrap_or_else(|| "0.0.0.0".to_string()),
            http_port: required(&lookup, &prefixed("HTTP_PORT"))?,
            grpc_port: required(&lookup, &prefixed("GRPC_PORT"))?,
            database,
        })
    }
}

fn required<F, T>(lookup: &F, name: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(name).ok_or_else(|| ConfigError::Missing(name.to_string()))?;
    parse(name, value)
}

fn optional<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => parse(name, value),
        None => Ok(default),
    }
}

fn parse<T: std::str::FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name: name.to_string(),
        value,
    })
}
