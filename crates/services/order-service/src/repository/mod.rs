//! Repository layer for data access.

pub mod entities;
mod order_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderRepository, OrderStore};
