//! User and profile entities and their request commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainResult;
use crate::validation::{required, validate};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Argon2 hash, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile attached to a user.
///
/// One profile per user is a convention only; nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub photo: String,
    pub country: String,
    pub address: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated user insert. The password is still plain text here; the store
/// hashes it on write.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

/// Validated profile insert or replacement, keyed by `user_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub user_id: i64,
    pub name: String,
    pub photo: String,
    pub country: String,
    pub address: String,
    pub phone: String,
}

// =============================================================================
// Commands
// =============================================================================

/// Create user request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    #[validate(
        required(message = "email field cannot be empty"),
        length(min = 1, message = "email field cannot be empty")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "jane@example.com"))]
    pub email: Option<String>,
    #[validate(
        required(message = "password field cannot be empty"),
        length(min = 1, message = "password field cannot be empty")
    )]
    pub password: Option<String>,
}

impl CreateUser {
    pub fn into_new_user(self) -> DomainResult<NewUser> {
        validate(&self)?;
        Ok(NewUser {
            email: required(self.email, "email")?,
            password: required(self.password, "password")?,
        })
    }
}

/// Lookup by email
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GetUser {
    #[validate(
        required(message = "email field cannot be empty"),
        length(min = 1, message = "email field cannot be empty")
    )]
    pub email: Option<String>,
}

impl GetUser {
    pub fn into_email(self) -> DomainResult<String> {
        validate(&self)?;
        required(self.email, "email")
    }
}

/// Compare a candidate password with the one stored for `email`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CheckPassword {
    #[validate(
        required(message = "email field cannot be empty"),
        length(min = 1, message = "email field cannot be empty")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "password field cannot be empty"),
        length(min = 1, message = "password field cannot be empty")
    )]
    pub password: Option<String>,
}

impl CheckPassword {
    /// Returns `(email, candidate)`.
    pub fn into_parts(self) -> DomainResult<(String, String)> {
        validate(&self)?;
        Ok((
            required(self.email, "email")?,
            required(self.password, "password")?,
        ))
    }
}

/// Profile create or full replace request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfileInput {
    #[validate(
        required(message = "user_id field cannot be empty"),
        range(min = 1, message = "user_id field must be a positive integer")
    )]
    pub user_id: Option<i64>,
    #[validate(
        required(message = "name field cannot be empty"),
        length(min = 1, message = "name field cannot be empty")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "photo field cannot be empty"),
        length(min = 1, message = "photo field cannot be empty")
    )]
    pub photo: Option<String>,
    #[validate(
        required(message = "country field cannot be empty"),
        length(min = 1, message = "country field cannot be empty")
    )]
    pub country: Option<String>,
    #[validate(
        required(message = "address field cannot be empty"),
        length(min = 1, message = "address field cannot be empty")
    )]
    pub address: Option<String>,
    #[validate(
        required(message = "phone field cannot be empty"),
        length(min = 1, message = "phone field cannot be empty")
    )]
    pub phone: Option<String>,
}

impl ProfileInput {
    pub fn into_new_profile(self) -> DomainResult<NewProfile> {
        validate(&self)?;
        Ok(NewProfile {
            user_id: required(self.user_id, "user_id")?,
            name: required(self.name, "name")?,
            photo: required(self.photo, "photo")?,
            country: required(self.country, "country")?,
            address: required(self.address, "address")?,
            phone: required(self.phone, "phone")?,
        })
    }
}

/// Profile lookup by owning user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GetProfile {
    #[validate(
        required(message = "user_id field cannot be empty"),
        range(min = 1, message = "user_id field must be a positive integer")
    )]
    pub user_id: Option<i64>,
}

impl GetProfile {
    pub fn into_user_id(self) -> DomainResult<i64> {
        validate(&self)?;
        required(self.user_id, "user_id")
    }
}
