//! Product service configuration, read with the `PRODUCT_SERVICE` prefix.

use common::{ConfigError, DatabaseConfig, ListenOverrides, ServiceConfig};

/// Environment variable prefix of this service.
pub const ENV_PREFIX: &str = "PRODUCT_SERVICE";

pub fn load(overrides: &ListenOverrides) -> Result<ServiceConfig, ConfigError> {
    ServiceConfig::load(ENV_PREFIX, overrides)
}

/// Load the database settings only.
pub fn database() -> Result<DatabaseConfig, ConfigError> {
    DatabaseConfig::from_env(ENV_PREFIX)
}
