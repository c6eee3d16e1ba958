//! SeaORM entities for the tables owned by the user service.

pub mod profile;
pub mod user;
