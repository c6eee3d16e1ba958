//! User Service Library
//!
//! This crate provides user and profile management over HTTP/JSON and gRPC.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod api;
pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

pub use common::{ListenOverrides, MigrateAction};

use crate::api::{create_router, AppState};
use crate::grpc::UserGrpcService;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};
use common::ServiceConfig;

/// Boxed error returned by the entry points.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run the user service (standalone or embedded in the combined binary).
pub async fn run_embedded(overrides: ListenOverrides) -> Result<(), BoxError> {
    let config = config::load(&overrides)?;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), BoxError> {
    let db = Database::connect_without_migrations(&config::database()?).await?;
    db.migrate(action).await?;
    Ok(())
}

/// Run the HTTP and gRPC servers with the given configuration.
async fn run_server_with_config(config: ServiceConfig) -> Result<(), BoxError> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    // Create repository and service
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(user_repo));

    // Both transports share the same service
    let router = create_router(AppState::new(user_service.clone(), db));
    let grpc_service = UserGrpcService::new(user_service);

    // Build addresses
    let http_addr: SocketAddr = format!("{}:{}", config.host, config.http_port).parse()?;
    let grpc_addr: SocketAddr = format!("{}:{}", config.host, config.grpc_port).parse()?;

    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    info!("User service HTTP listening on {}", http_addr);
    info!("User service gRPC listening on {}", grpc_addr);

    let http = async {
        axum::serve(listener, router)
            .await
            .map_err(BoxError::from)
    };
    let grpc = async {
        Server::builder()
            .add_service(proto::UserServiceServer::new(grpc_service))
            .serve(grpc_addr)
            .await
            .map_err(BoxError::from)
    };

    tokio::try_join!(http, grpc)?;
    Ok(())
}
