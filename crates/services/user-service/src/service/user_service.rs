//! User service - validation and business rules for users and profiles.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::constants::{ENTITY_PROFILE, ENTITY_USER};
use domain::{
    check_password, CheckPassword, CreateUser, GetProfile, GetUser, Profile, ProfileInput, User,
};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// Every operation validates its command before touching the repository.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user, returning its id
    async fn create_user(&self, input: CreateUser) -> AppResult<i64>;

    /// Get user by email
    async fn get_user(&self, input: GetUser) -> AppResult<User>;

    /// Whether the candidate password matches the stored one
    async fn check_password(&self, input: CheckPassword) -> AppResult<bool>;

    /// Create a profile, returning its id
    async fn create_profile(&self, input: ProfileInput) -> AppResult<i64>;

    /// Get the profile of a user
    async fn get_profile(&self, input: GetProfile) -> AppResult<Profile>;

    /// Replace the profile fields of a user
    async fn update_profile(&self, input: ProfileInput) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

fn rejected(operation: &str, err: domain::DomainError) -> AppError {
    tracing::info!(operation, error = %err, "Request rejected");
    AppError::from(err)
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<i64> {
        let new_user = input
            .into_new_user()
            .map_err(|e| rejected("create_user", e))?;

        self.repo.create(new_user.email, new_user.password).await
    }

    async fn get_user(&self, input: GetUser) -> AppResult<User> {
        let email = input.into_email().map_err(|e| rejected("get_user", e))?;

        self.repo
            .find_by_email(&email)
            .await?
            .ok_or_not_found(ENTITY_USER)
    }

    async fn check_password(&self, input: CheckPassword) -> AppResult<bool> {
        let (email, candidate) = input
            .into_parts()
            .map_err(|e| rejected("check_password", e))?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or_not_found(ENTITY_USER)?;

        Ok(check_password(&user.password_hash, &candidate))
    }

    async fn create_profile(&self, input: ProfileInput) -> AppResult<i64> {
        let profile = input
            .into_new_profile()
            .map_err(|e| rejected("create_profile", e))?;

        self.repo.create_profile(profile).await
    }

    async fn get_profile(&self, input: GetProfile) -> AppResult<Profile> {
        let user_id = input
            .into_user_id()
            .map_err(|e| rejected("get_profile", e))?;

        self.repo
            .find_profile_by_user_id(user_id)
            .await?
            .ok_or_not_found(ENTITY_PROFILE)
    }

    async fn update_profile(&self, input: ProfileInput) -> AppResult<()> {
        let profile = input
            .into_new_profile()
            .map_err(|e| rejected("update_profile", e))?;

        match self.repo.update_profile(profile).await? {
            0 => Err(AppError::NotFound(ENTITY_PROFILE)),
            _ => Ok(()),
        }
    }
}
