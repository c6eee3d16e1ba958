//! Domain layer - Core business entities and request commands.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Entities and commands here are shared by the user, product and order
//! services and by both of their transports (HTTP and gRPC).

pub mod constants;
pub mod error;
pub mod order;
pub mod password;
pub mod product;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use order::{
    CreateOrder, GetOrder, GetOrdersByUser, NewOrder, Order, OrderStatus, UpdateOrder,
    UpdateOrderStatus,
};
pub use password::{check_password, Password};
pub use product::{
    CreateProduct, GetProduct, GetProducts, NewProduct, Product, UpdateProduct,
    UpdateProductStock,
};
pub use user::{
    CheckPassword, CreateUser, GetProfile, GetUser, NewProfile, NewUser, Profile, ProfileInput,
    User,
};
