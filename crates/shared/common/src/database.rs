//! Database connection and migration management.

use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    RuntimeErr, Statement,
};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use crate::config::DatabaseConfig;

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    /// Roll back every migration
    Reset,
    Fresh,
}

/// Database wrapper for connection management, bound to the migrator of the
/// service that owns it.
///
/// Clones share one connection pool.
pub struct Database<M> {
    connection: Arc<DatabaseConnection>,
    _migrator: PhantomData<M>,
}

impl<M> Clone for Database<M> {
    fn clone(&self) -> Self {
        Self {
            connection: Arc::clone(&self.connection),
            _migrator: PhantomData,
        }
    }
}

impl<M: MigratorTrait> Database<M> {
    /// Initialize database connection and run pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        M::up(db.connection.as_ref(), None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    ///
    /// The whole attempt is bounded by `config.connect_timeout`.
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .sqlx_logging(false);

        let connection = tokio::time::timeout(config.connect_timeout, SeaDatabase::connect(options))
            .await
            .map_err(|_| {
                DbErr::Conn(RuntimeErr::Internal(format!(
                    "database connect timed out after {:?}",
                    config.connect_timeout
                )))
            })??;

        Ok(Self::from_connection(connection))
    }

    /// Wrap an existing connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
            _migrator: PhantomData,
        }
    }

    /// Shared handle to the connection pool, for the stores.
    pub fn get_connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.connection)
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        M::up(self.connection.as_ref(), None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        M::down(self.connection.as_ref(), Some(1)).await
    }

    /// List every defined migration with its applied flag.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let migrations = M::get_migration_with_status(self.connection.as_ref()).await?;

        Ok(migrations
            .iter()
            .map(|m| (m.name().to_string(), m.status() == MigrationStatus::Applied))
            .collect())
    }

    /// Roll back every migration of this service. Tables owned by other
    /// services sharing the database are left alone.
    pub async fn reset_migrations(&self) -> Result<(), DbErr> {
        M::down(self.connection.as_ref(), None).await
    }

    /// Roll back every migration of this service, then apply them again.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        self.reset_migrations().await?;
        self.run_migrations().await
    }

    /// Execute a migration action and report the outcome.
    pub async fn migrate(&self, action: MigrateAction) -> Result<(), DbErr> {
        match action {
            MigrateAction::Up => {
                self.run_migrations().await?;
                tracing::info!("Migrations applied successfully");
            }
            MigrateAction::Down => {
                self.rollback_migration().await?;
                tracing::info!("Rolled back last migration");
            }
            MigrateAction::Status => {
                for (name, applied) in self.migration_status().await? {
                    let marker = if applied { "[x]" } else { "[ ]" };
                    println!("{} {}", marker, name);
                }
            }
            MigrateAction::Reset => {
                self.reset_migrations().await?;
                tracing::info!("Rolled back all migrations");
            }
            MigrateAction::Fresh => {
                self.fresh_migrations().await?;
                tracing::info!("Migrations reset and reapplied");
            }
        }

        Ok(())
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use sea_orm_migration::{MigrationTrait, MigratorTrait};

    use super::*;

    struct NoMigrations;

    impl MigratorTrait for NoMigrations {
        fn migrations() -> Vec<Box<dyn MigrationTrait>> {
            Vec::new()
        }
    }

    fn ok() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    #[tokio::test]
    async fn test_clones_share_one_pool() {
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok(), ok()])
            .into_connection();
        let db = Database::<NoMigrations>::from_connection(connection);
        let copy = db.clone();

        assert!(Arc::ptr_eq(&db.get_connection(), &copy.get_connection()));
        db.ping().await.unwrap();
        copy.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_ping_reports_failure() {
        let connection = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let db = Database::<NoMigrations>::from_connection(connection);

        assert!(db.ping().await.is_err());
    }
}
