//! HTTP helpers shared by the service APIs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

/// JSON body extractor whose rejections render as the error envelope.
///
/// Field rules are not checked here; the service validates every command.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::info!("Rejected request body: {}", e.body_text());
            AppError::bad_request(e.body_text())
        })?;

        Ok(JsonBody(value))
    }
}

/// Body of a successful create.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct IdResponse {
    #[schema(example = 1)]
    pub id: i64,
}

/// 201 Created with the new record id.
pub struct Created(pub i64);

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(IdResponse { id: self.0 })).into_response()
    }
}

/// 204 No Content for updates.
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: ServiceHealth,
}

/// Dependency health with optional error message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(feature = "database")]
pub use health::health_check;

#[cfg(feature = "database")]
mod health {
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };
    use sea_orm_migration::MigratorTrait;

    use super::{HealthResponse, ServiceHealth};
    use crate::database::Database;

    /// Health check endpoint - verifies database connectivity.
    pub async fn health_check<M>(State(db): State<Database<M>>) -> Response
    where
        M: MigratorTrait + Send + Sync + 'static,
    {
        let database = match db.ping().await {
            Ok(()) => ServiceHealth {
                status: "healthy".to_string(),
                error: None,
            },
            Err(e) => ServiceHealth {
                status: "unhealthy".to_string(),
                error: Some(e.to_string()),
            },
        };

        let healthy = database.error.is_none();
        let response = HealthResponse {
            status: if healthy { "healthy" } else { "degraded" }.to_string(),
            database,
        };

        if healthy {
            (StatusCode::OK, Json(response)).into_response()
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
        }
    }
}
