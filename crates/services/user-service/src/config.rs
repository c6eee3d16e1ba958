//! User service configuration.
//!
//! Variables are read with the `USER_SERVICE` prefix, for example
//! `USER_SERVICE_HTTP_PORT`; see `common::config` for the full set.

use common::{ConfigError, DatabaseConfig, ListenOverrides, ServiceConfig};

/// Environment variable prefix of this service.
pub const ENV_PREFIX: &str = "USER_SERVICE";

/// Load the full service configuration.
pub fn load(overrides: &ListenOverrides) -> Result<ServiceConfig, ConfigError> {
    ServiceConfig::load(ENV_PREFIX, overrides)
}

/// Load the database settings only.
pub fn database() -> Result<DatabaseConfig, ConfigError> {
    DatabaseConfig::from_env(ENV_PREFIX)
}
