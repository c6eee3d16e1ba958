//! SeaORM entities for the tables owned by the product service.

pub mod product;
