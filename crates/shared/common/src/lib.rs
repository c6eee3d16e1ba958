//! Common utilities shared across all microservices.
//!
//! This crate provides:
//! - Unified error handling for HTTP and gRPC
//! - Environment configuration
//! - Database connection and migration handling
//! - HTTP extractors and response helpers

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod error;
pub mod http;

pub use config::{ConfigError, DatabaseConfig, ListenOverrides, ServiceConfig};
#[cfg(feature = "database")]
pub use database::{Database, MigrateAction};
pub use error::{AppError, AppResult, ErrorResponse, OptionExt};
pub use http::{Created, IdResponse, JsonBody, NoContent};
