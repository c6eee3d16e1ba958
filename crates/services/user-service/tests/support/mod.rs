//! In-memory repository and HTTP helpers shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::Value;
use tower::ServiceExt;

use common::{AppError, AppResult};
use domain::{NewProfile, Password, Profile, User};
use user_service_lib::api::{create_router, AppState};
use user_service_lib::infra::Database;
use user_service_lib::repository::UserRepository;
use user_service_lib::service::{UserManager, UserService};

/// Repository that keeps rows in memory and mimics the table constraints.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    profiles: Mutex<Vec<Profile>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, email: String, password: String) -> AppResult<i64> {
        let hash = Password::new(&password)?.into_string();
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::conflict("record already exists"));
        }

        let id = users.len() as i64 + 1;
        users.push(User {
            id,
            email,
            password_hash: hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_profile(&self, profile: NewProfile) -> AppResult<i64> {
        if !self.users.lock().unwrap().iter().any(|u| u.id == profile.user_id) {
            return Err(AppError::validation("referenced record does not exist"));
        }

        let mut profiles = self.profiles.lock().unwrap();
        let id = profiles.len() as i64 + 1;
        profiles.push(Profile {
            id,
            user_id: profile.user_id,
            name: profile.name,
            photo: profile.photo,
            country: profile.country,
            address: profile.address,
            phone: profile.phone,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_profile_by_user_id(&self, user_id: i64) -> AppResult<Option<Profile>> {
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn update_profile(&self, profile: NewProfile) -> AppResult<u64> {
        let mut profiles = self.profiles.lock().unwrap();
        let mut changed = 0;
        for row in profiles.iter_mut().filter(|p| p.user_id == profile.user_id) {
            row.name = profile.name.clone();
            row.photo = profile.photo.clone();
            row.country = profile.country.clone();
            row.address = profile.address.clone();
            row.phone = profile.phone.clone();
            row.updated_at = Utc::now();
            changed += 1;
        }
        Ok(changed)
    }
}

/// Service backed by a fresh in-memory repository.
pub fn service() -> Arc<dyn UserService> {
    Arc::new(UserManager::new(Arc::new(InMemoryUserRepository::default())))
}

/// Router over a fresh in-memory repository. The mock database answers a
/// single health ping.
pub fn app() -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    create_router(AppState::new(service(), Database::from_connection(db)))
}

/// Send a JSON request and decode the JSON response (Null when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
