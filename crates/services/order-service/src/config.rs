//! Order service configuration.
//!
//! Variables use the `ORDER_SERVICE` prefix. The database is normally the one
//! the user service migrates, since orders reference `vstore_user`.

use common::{ConfigError, DatabaseConfig, ListenOverrides, ServiceConfig};

/// Environment variable prefix of this service.
pub const ENV_PREFIX: &str = "ORDER_SERVICE";

/// Load the full service configuration.
pub fn load(overrides: &ListenOverrides) -> Result<ServiceConfig, ConfigError> {
    ServiceConfig::load(ENV_PREFIX, overrides)
}

pub fn database() -> Result<DatabaseConfig, ConfigError> {
    DatabaseConfig::from_env(ENV_PREFIX)
}
