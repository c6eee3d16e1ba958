//! Product entity and its request commands.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainResult;
use crate::validation::{positive_price, required, validate};

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[cfg_attr(feature = "openapi", schema(value_type = f64, example = 9.99))]
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated product fields, used for inserts and full replacements.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
}

// =============================================================================
// Commands
// =============================================================================

/// Create product request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateProduct {
    #[validate(
        required(message = "name field cannot be empty"),
        length(min = 1, message = "name field cannot be empty")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "widget"))]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(
        required(message = "price field cannot be empty"),
        custom(function = "positive_price")
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<f64>, example = 9.99))]
    pub price: Option<Decimal>,
    #[validate(
        required(message = "stock field cannot be empty"),
        range(min = 0, message = "stock field cannot be negative")
    )]
    #[cfg_attr(feature = "openapi", schema(example = 10))]
    pub stock: Option<i32>,
}

impl CreateProduct {
    pub fn into_new_product(self) -> DomainResult<NewProduct> {
        validate(&self)?;
        Ok(NewProduct {
            name: required(self.name, "name")?,
            price: required(self.price, "price")?,
            stock: required(self.stock, "stock")?,
        })
    }
}

/// Lookup by id
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GetProduct {
    #[validate(
        required(message = "id field cannot be empty"),
        range(min = 1, message = "id field must be a positive integer")
    )]
    pub id: Option<i64>,
}

impl GetProduct {
    pub fn into_id(self) -> DomainResult<i64> {
        validate(&self)?;
        required(self.id, "id")
    }
}

/// Lookup of every product with an exact name
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GetProducts {
    #[validate(
        required(message = "name field cannot be empty"),
        length(min = 1, message = "name field cannot be empty")
    )]
    pub name: Option<String>,
}

impl GetProducts {
    pub fn into_name(self) -> DomainResult<String> {
        validate(&self)?;
        required(self.name, "name")
    }
}

/// Full product replacement
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateProduct {
    #[validate(
        required(message = "id field cannot be empty"),
        range(min = 1, message = "id field must be a positive integer")
    )]
    pub id: Option<i64>,
    #[validate(
        required(message = "name field cannot be empty"),
        length(min = 1, message = "name field cannot be empty")
    )]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(
        required(message = "price field cannot be empty"),
        custom(function = "positive_price")
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,
    #[validate(
        required(message = "stock field cannot be empty"),
        range(min = 0, message = "stock field cannot be negative")
    )]
    pub stock: Option<i32>,
}

impl UpdateProduct {
    /// Returns the target id and its replacement fields.
    pub fn into_parts(self) -> DomainResult<(i64, NewProduct)> {
        validate(&self)?;
        Ok((
            required(self.id, "id")?,
            NewProduct {
                name: required(self.name, "name")?,
                price: required(self.price, "price")?,
                stock: required(self.stock, "stock")?,
            },
        ))
    }
}

/// Stock-only update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateProductStock {
    #[validate(
        required(message = "id field cannot be empty"),
        range(min = 1, message = "id field must be a positive integer")
    )]
    pub id: Option<i64>,
    #[validate(
        required(message = "stock field cannot be empty"),
        range(min = 0, message = "stock field cannot be negative")
    )]
    pub stock: Option<i32>,
}

impl UpdateProductStock {
    /// Returns `(id, stock)`.
    pub fn into_parts(self) -> DomainResult<(i64, i32)> {
        validate(&self)?;
        Ok((required(self.id, "id")?, required(self.stock, "stock")?))
    }
}
