//! Application state for dependency injection.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::infra::Database;
use crate::service::ProductService;

/// Application state shared across handlers.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    pub db: Database,
}

impl AppState {
    pub fn new(product_service: Arc<dyn ProductService>, db: Database) -> Self {
        Self {
            product_service,
            db,
        }
    }
}
