//! Database migrations.
//!
//! Migration history is kept in `order_service_migrations`. The order table
//! references `vstore_user`, so the user service migrations must run first.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_order_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_order_table::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("order_service_migrations").into_iden()
    }
}
