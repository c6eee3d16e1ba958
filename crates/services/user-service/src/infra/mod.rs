//! Infrastructure layer - schema migrations and the database handle.

pub mod migrations;

pub use migrations::Migrator;

/// Database handle bound to the user service migrations.
pub type Database = common::Database<Migrator>;
