//! Route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::http::health_check;
use domain::constants::API_PREFIX;

use super::handlers::order_routes;
use super::openapi::ApiDoc;
use super::state::AppState;
use crate::infra::Migrator;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check::<Migrator>))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(API_PREFIX, order_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
