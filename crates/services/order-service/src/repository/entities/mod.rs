//! SeaORM entities for the tables owned by the order service.

pub mod order;
