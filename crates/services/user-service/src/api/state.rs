//! Application state for dependency injection.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::infra::Database;
use crate::service::UserService;

/// Application state shared across handlers.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub db: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, db: Database) -> Self {
        Self { user_service, db }
    }
}
