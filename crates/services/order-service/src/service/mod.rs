//! Service layer - business logic.

mod order_service;

pub use order_service::{OrderManager, OrderService};
