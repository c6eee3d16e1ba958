//! Order entity, order status and request commands.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    STATUS_CANCELLED, STATUS_COMPLETED, STATUS_PENDING, STATUS_SHIPPED, VALID_STATUSES,
};
use crate::error::{DomainError, DomainResult};
use crate::validation::{known_status, positive_total_price, required, validate};

/// Order lifecycle state.
///
/// Transitions are unconstrained: any state may replace any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => STATUS_PENDING,
            OrderStatus::Shipped => STATUS_SHIPPED,
            OrderStatus::Completed => STATUS_COMPLETED,
            OrderStatus::Cancelled => STATUS_CANCELLED,
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(OrderStatus::Pending),
            STATUS_SHIPPED => Ok(OrderStatus::Shipped),
            STATUS_COMPLETED => Ok(OrderStatus::Completed),
            STATUS_CANCELLED => Ok(OrderStatus::Cancelled),
            _ => Err(DomainError::validation(format!(
                "status field must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    #[cfg_attr(feature = "openapi", schema(value_type = f64, example = 25.5))]
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated order insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub total_price: Decimal,
    pub status: OrderStatus,
}

// =============================================================================
// Commands
// =============================================================================

/// Create order request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateOrder {
    #[validate(
        required(message = "user_id field cannot be empty"),
        range(min = 1, message = "user_id field must be a positive integer")
    )]
    pub user_id: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(
        required(message = "total_price field cannot be empty"),
        custom(function = "positive_total_price")
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<f64>, example = 25.5))]
    pub total_price: Option<Decimal>,
    #[validate(
        required(message = "status field cannot be empty"),
        custom(function = "known_status")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "pending"))]
    pub status: Option<String>,
}

impl CreateOrder {
    pub fn into_new_order(self) -> DomainResult<NewOrder> {
        validate(&self)?;
        Ok(NewOrder {
            user_id: required(self.user_id, "user_id")?,
            total_price: required(self.total_price, "total_price")?,
            status: required(self.status, "status")?.parse()?,
        })
    }
}

/// Lookup by id
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GetOrder {
    #[validate(
        required(message = "id field cannot be empty"),
        range(min = 1, message = "id field must be a positive integer")
    )]
    pub id: Option<i64>,
}

impl GetOrder {
    pub fn into_id(self) -> DomainResult<i64> {
        validate(&self)?;
        required(self.id, "id")
    }
}

/// Every order placed by one user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GetOrdersByUser {
    #[validate(
        required(message = "user_id field cannot be empty"),
        range(min = 1, message = "user_id field must be a positive integer")
    )]
    pub user_id: Option<i64>,
}

impl GetOrdersByUser {
    pub fn into_user_id(self) -> DomainResult<i64> {
        validate(&self)?;
        required(self.user_id, "user_id")
    }
}

/// Replace status and total price
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateOrder {
    #[validate(
        required(message = "id field cannot be empty"),
        range(min = 1, message = "id field must be a positive integer")
    )]
    pub id: Option<i64>,
    #[validate(
        required(message = "status field cannot be empty"),
        custom(function = "known_status")
    )]
    pub status: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(
        required(message = "total_price field cannot be empty"),
        custom(function = "positive_total_price")
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<f64>))]
    pub total_price: Option<Decimal>,
}

impl UpdateOrder {
    /// Returns `(id, status, total_price)`.
    pub fn into_parts(self) -> DomainResult<(i64, OrderStatus, Decimal)> {
        validate(&self)?;
        Ok((
            required(self.id, "id")?,
            required(self.status, "status")?.parse()?,
            required(self.total_price, "total_price")?,
        ))
    }
}

/// Status-only update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateOrderStatus {
    #[validate(
        required(message = "id field cannot be empty"),
        range(min = 1, message = "id field must be a positive integer")
    )]
    pub id: Option<i64>,
    #[validate(
        required(message = "status field cannot be empty"),
        custom(function = "known_status")
    )]
    pub status: Option<String>,
}

impl UpdateOrderStatus {
    /// Returns `(id, status)`.
    pub fn into_parts(self) -> DomainResult<(i64, OrderStatus)> {
        validate(&self)?;
        Ok((
            required(self.id, "id")?,
            required(self.status, "status")?.parse()?,
        ))
    }
}
