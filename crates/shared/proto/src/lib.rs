//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for:
//! - UserService: accounts, password checks and profiles
//! - ProductService: catalogue and stock
//! - OrderService: orders and their status

/// User service definitions.
pub mod user {
    tonic::include_proto!("user");
}

/// Product service definitions.
pub mod product {
    tonic::include_proto!("product");
}

/// Order service definitions.
pub mod order {
    tonic::include_proto!("order");
}

// Server traits and wrappers, for the services that implement them
pub use order::order_service_server::{OrderService, OrderServiceServer};
pub use product::product_service_server::{ProductService, ProductServiceServer};
pub use user::user_service_server::{UserService, UserServiceServer};
