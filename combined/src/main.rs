//! Combined binary for development - runs all services in one process.
//!
//! The three services share one database. Orders reference users, so
//! migrations are applied user → product → order and rolled back in the
//! reverse order.

use clap::{Parser, Subcommand};
use tokio::task::JoinError;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{ListenOverrides, MigrateAction};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "vstore")]
#[command(about = "Combined virtual store services for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8001")]
        user_http_port: u16,
        #[arg(long, default_value = "50051")]
        user_grpc_port: u16,
        #[arg(long, default_value = "8002")]
        product_http_port: u16,
        #[arg(long, default_value = "50052")]
        product_grpc_port: u16,
        #[arg(long, default_value = "8003")]
        order_http_port: u16,
        #[arg(long, default_value = "50053")]
        order_grpc_port: u16,
    },
    /// Run database migrations for all services
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback the last migration of every service
    Down,
    /// Show migration status
    Status,
    /// Roll back all migrations
    Reset,
    /// Roll back and reapply all migrations
    Fresh,
}

fn listen(host: &str, http_port: u16, grpc_port: u16) -> ListenOverrides {
    ListenOverrides {
        host: Some(host.to_string()),
        http_port: Some(http_port),
        grpc_port: Some(grpc_port),
    }
}

/// Apply an action to every service, honouring the foreign key between
/// orders and users.
async fn migrate_all(action: MigrateAction) -> Result<(), BoxError> {
    match action {
        MigrateAction::Up | MigrateAction::Status => forward(action).await,
        MigrateAction::Down | MigrateAction::Reset => backward(action).await,
        MigrateAction::Fresh => {
            backward(MigrateAction::Reset).await?;
            forward(MigrateAction::Up).await
        }
    }
}

async fn forward(action: MigrateAction) -> Result<(), BoxError> {
    user_service_lib::run_migrations(action).await?;
    product_service_lib::run_migrations(action).await?;
    order_service_lib::run_migrations(action).await
}

async fn backward(action: MigrateAction) -> Result<(), BoxError> {
    order_service_lib::run_migrations(action).await?;
    product_service_lib::run_migrations(action).await?;
    user_service_lib::run_migrations(action).await
}

/// Turn the outcome of a service task into the error the process exits with.
fn exited(service: &str, res: Result<Result<(), BoxError>, JoinError>) -> BoxError {
    match res {
        Ok(Ok(())) => format!("{} service exited unexpectedly", service).into(),
        Ok(Err(e)) => format!("{} service failed: {}", service, e).into(),
        Err(e) => format!("{} service task aborted: {}", service, e).into(),
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            user_http_port,
            user_grpc_port,
            product_http_port,
            product_grpc_port,
            order_http_port,
            order_grpc_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  User service:    http://{}:{} grpc {}", host, user_http_port, user_grpc_port);
            info!(
                "  Product service: http://{}:{} grpc {}",
                host, product_http_port, product_grpc_port
            );
            info!("  Order service:   http://{}:{} grpc {}", host, order_http_port, order_grpc_port);

            // Schema first, in dependency order, before any service connects
            migrate_all(MigrateAction::Up).await?;

            let user = listen(&host, user_http_port, user_grpc_port);
            let user_handle = tokio::spawn(user_service_lib::run_embedded(user));

            let product = listen(&host, product_http_port, product_grpc_port);
            let product_handle = tokio::spawn(product_service_lib::run_embedded(product));

            let order = listen(&host, order_http_port, order_grpc_port);
            let order_handle = tokio::spawn(order_service_lib::run_embedded(order));

            // The first service to return takes the process down
            let err = tokio::select! {
                res = user_handle => exited("User", res),
                res = product_handle => exited("Product", res),
                res = order_handle => exited("Order", res),
            };
            error!("{}", err);
            return Err(err);
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Reset => MigrateAction::Reset,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            migrate_all(migrate_action).await?;
        }
    }

    Ok(())
}
