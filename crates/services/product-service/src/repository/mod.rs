//! Repository layer for data access.

pub mod entities;
mod product_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRepository, ProductStore};
