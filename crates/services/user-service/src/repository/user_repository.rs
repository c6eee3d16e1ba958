//! User and profile repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::entities::profile::{self, Entity as ProfileEntity};
use super::entities::user::{self, Entity as UserEntity};
use common::AppResult;
use domain::{NewProfile, Password, Profile, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Hash the password and insert a new user, returning its id
    async fn create(&self, email: String, password: String) -> AppResult<i64>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a profile, returning its id
    async fn create_profile(&self, profile: NewProfile) -> AppResult<i64>;

    /// Oldest profile of a user
    async fn find_profile_by_user_id(&self, user_id: i64) -> AppResult<Option<Profile>>;

    /// Replace the fields of every profile owned by `profile.user_id`.
    /// Returns the number of rows changed.
    async fn update_profile(&self, profile: NewProfile) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, email: String, password: String) -> AppResult<i64> {
        let password = Password::new(&password)?;
        let now = Utc::now();

        let active_model = user::ActiveModel {
            id: NotSet,
            email: Set(email),
            password: Set(password.into_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = UserEntity::insert(active_model).exec(self.db.as_ref()).await?;
        Ok(result.last_insert_id)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?;

        Ok(result.map(User::from))
    }

    async fn create_profile(&self, profile: NewProfile) -> AppResult<i64> {
        let now = Utc::now();

        let active_model = profile::ActiveModel {
            id: NotSet,
            user_id: Set(profile.user_id),
            name: Set(profile.name),
            photo: Set(profile.photo),
            country: Set(profile.country),
            address: Set(profile.address),
            phone: Set(profile.phone),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = ProfileEntity::insert(active_model).exec(self.db.as_ref()).await?;
        Ok(result.last_insert_id)
    }

    async fn find_profile_by_user_id(&self, user_id: i64) -> AppResult<Option<Profile>> {
        let result = ProfileEntity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .order_by_asc(profile::Column::Id)
            .one(self.db.as_ref())
            .await?;

        Ok(result.map(Profile::from))
    }

    async fn update_profile(&self, profile: NewProfile) -> AppResult<u64> {
        let result = ProfileEntity::update_many()
            .set(profile::ActiveModel {
                name: Set(profile.name),
                photo: Set(profile.photo),
                country: Set(profile.country),
                address: Set(profile.address),
                phone: Set(profile.phone),
                updated_at: Set(Utc::now()),
                ..Default::default()
            })
            .filter(profile::Column::UserId.eq(profile.user_id))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}
