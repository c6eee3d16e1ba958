//! Order Service - HTTP and gRPC server for orders.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use order_service_lib::{ListenOverrides, MigrateAction};

#[derive(Parser)]
#[command(name = "order-service")]
#[command(about = "Order management microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP and gRPC servers
    Serve {
        /// Overrides ORDER_SERVICE_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides ORDER_SERVICE_HTTP_PORT
        #[arg(long)]
        http_port: Option<u16>,
        /// Overrides ORDER_SERVICE_GRPC_PORT
        #[arg(long)]
        grpc_port: Option<u16>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Roll back all migrations
    Reset,
    /// Roll back and reapply all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), order_service_lib::BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            http_port,
            grpc_port,
        } => {
            order_service_lib::run_embedded(ListenOverrides {
                host,
                http_port,
                grpc_port,
            })
            .await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Reset => MigrateAction::Reset,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            order_service_lib::run_migrations(migrate_action).await?;
        }
    }

    Ok(())
}
