//! Domain-level errors.
//!
//! Raised while checking request commands and handling passwords. The
//! services convert them into `common::AppError`.

use thiserror::Error;

/// Failures that can happen before any storage is involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for one or more fields
    #[error("{0}")]
    Validation(String),

    /// Password hashing or hash parsing failed
    #[error("Password error: {0}")]
    Password(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Validation error for a required field that was not supplied
    pub fn empty_field(field: &str) -> Self {
        DomainError::Validation(format!("{} field cannot be empty", field))
    }

    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
