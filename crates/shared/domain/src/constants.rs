//! Domain-level constants.
//!
//! These constants name the entities and order states shared by the
//! services and their transports.

// =============================================================================
// Entities
// =============================================================================

/// Entity name used in user lookups and errors
pub const ENTITY_USER: &str = "user";

/// Entity name used in profile lookups and errors
pub const ENTITY_PROFILE: &str = "profile";

/// Entity name used in product lookups and errors
pub const ENTITY_PRODUCT: &str = "product";

/// Entity name used in order lookups and errors
pub const ENTITY_ORDER: &str = "order";

// =============================================================================
// Order Status
// =============================================================================

/// Order accepted but not yet shipped
pub const STATUS_PENDING: &str = "pending";

/// Order handed over to the carrier
pub const STATUS_SHIPPED: &str = "shipped";

/// Order delivered
pub const STATUS_COMPLETED: &str = "completed";

/// Order cancelled
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid status values
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_SHIPPED,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// Check if a status value is valid
pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

// =============================================================================
// Transport
// =============================================================================

/// Acknowledgement returned by RPC mutations that have no payload
pub const SUCCESS_MESSAGE: &str = "Success!";

/// Prefix shared by every HTTP route
pub const API_PREFIX: &str = "/api/v1";
