//! Presence validation shared by every request command.
//!
//! Commands carry `Option` fields so that "not supplied" is distinct from any
//! legitimate value. The `validator` derive on each command checks presence
//! and per-value rules; the helpers here turn its report into a single
//! field-specific `DomainError` and unwrap the checked values.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{is_valid_status, VALID_STATUSES};
use crate::error::{DomainError, DomainResult};

/// Run the derived validation rules of a command.
///
/// Every failing field contributes its message; messages are sorted and
/// joined with `"; "` so the report is deterministic.
pub fn validate<T: Validate>(input: &T) -> DomainResult<()> {
    input
        .validate()
        .map_err(|errors| DomainError::Validation(collect_messages(&errors)))
}

/// Unwrap a field that has already passed presence validation.
pub fn required<T>(value: Option<T>, field: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::empty_field(field))
}

fn collect_messages(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} field is invalid", field),
            })
        })
        .collect();

    messages.sort();
    messages.dedup();
    messages.join("; ")
}

// =============================================================================
// Custom rules
// =============================================================================

/// `price` must be strictly positive.
pub fn positive_price(value: &Decimal) -> Result<(), ValidationError> {
    positive(value, "price")
}

/// `total_price` must be strictly positive.
pub fn positive_total_price(value: &Decimal) -> Result<(), ValidationError> {
    positive(value, "total_price")
}

/// `status` must name a known order state.
pub fn known_status(value: &str) -> Result<(), ValidationError> {
    if is_valid_status(value) {
        return Ok(());
    }

    let mut error = ValidationError::new("status");
    error.message = Some(Cow::Owned(if value.is_empty() {
        "status field cannot be empty".to_string()
    } else {
        format!("status field must be one of: {}", VALID_STATUSES.join(", "))
    }));
    Err(error)
}

/// Largest magnitude a `NUMERIC(12, 2)` column holds, exclusive.
const MONEY_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

fn positive(value: &Decimal, field: &str) -> Result<(), ValidationError> {
    let message = if *value <= Decimal::ZERO {
        format!("{} field must be positive", field)
    } else if value.normalize().scale() > 2 {
        format!("{} field must have at most two decimal places", field)
    } else if *value >= MONEY_LIMIT {
        format!("{} field must be less than {}", field, MONEY_LIMIT)
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new("positive");
    error.message = Some(Cow::Owned(message));
    Err(error)
}
