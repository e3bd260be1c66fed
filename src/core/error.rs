//! Typed error handling for the restaurant admin API
//!
//! Every failure the API can surface is represented here so that handlers
//! return specific, matchable errors instead of generic `anyhow::Error`
//! values.
//!
//! # Error categories
//!
//! - [`OrderError`]: order intake and lifecycle failures
//! - [`CatalogError`]: menu item lookups and mutations
//! - [`ValidationError`]: field-level constraint violations
//! - [`StorageError`]: persistence backend failures
//!
//! # Example
//!
//! ```rust,ignore
//! match service.update_status(&id, status).await {
//!     Ok(order) => println!("now {}", order.status),
//!     Err(AdminError::Order(OrderError::NotFound { id })) => {
//!         println!("order {} does not exist", id);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::orders::model::OrderStatus;

/// The main error type for the restaurant admin API
///
/// Each variant wraps a more specific error type for that category.
#[derive(Debug)]
pub enum AdminError {
    /// Order intake and lifecycle errors
    Order(OrderError),

    /// Menu catalog errors
    Catalog(CatalogError),

    /// Field validation errors
    Validation(ValidationError),

    /// Persistence backend errors
    Storage(StorageError),
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Order(e) => write!(f, "{}", e),
            AdminError::Catalog(e) => write!(f, "{}", e),
            AdminError::Validation(e) => write!(f, "{}", e),
            AdminError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdminError::Order(e) => Some(e),
            AdminError::Catalog(e) => Some(e),
            AdminError::Validation(e) => Some(e),
            AdminError::Storage(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `false`; mirrors the `success` flag on happy-path envelopes
    pub success: bool,
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AdminError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::Order(e) => e.status_code(),
            AdminError::Catalog(e) => e.status_code(),
            AdminError::Validation(_) => StatusCode::BAD_REQUEST,
            AdminError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Order(e) => e.error_code(),
            AdminError::Catalog(e) => e.error_code(),
            AdminError::Validation(_) => "VALIDATION_FAILURE",
            AdminError::Storage(_) => "PERSISTENCE_UNAVAILABLE",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        // Storage details stay internal; the client sees a generic message.
        let message = match self {
            AdminError::Storage(_) => "Server error while accessing storage".to_string(),
            other => other.to_string(),
        };
        ErrorResponse {
            success: false,
            code: self.error_code().to_string(),
            message,
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AdminError::Order(OrderError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id.to_string() }))
            }
            AdminError::Order(OrderError::ItemUnavailable { name }) => {
                Some(serde_json::json!({ "item": name }))
            }
            AdminError::Catalog(CatalogError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id.to_string() }))
            }
            AdminError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Order Errors
// =============================================================================

/// Errors related to order intake and lifecycle
#[derive(Debug)]
pub enum OrderError {
    /// Order was not found
    NotFound { id: Uuid },

    /// Order was submitted with no line items
    Empty,

    /// One or more referenced menu items do not exist
    UnknownMenuItem,

    /// A referenced menu item exists but is not available
    ItemUnavailable { name: String },

    /// A line quantity is missing or not a positive integer
    InvalidQuantity { index: usize },

    /// Requested status is not one of the fixed set
    InvalidStatus { value: String },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::NotFound { id } => {
                write!(f, "Order with id '{}' not found", id)
            }
            OrderError::Empty => {
                write!(f, "Order must have at least one item")
            }
            OrderError::UnknownMenuItem => {
                write!(f, "One or more menu items not found")
            }
            OrderError::ItemUnavailable { name } => {
                write!(f, "{} is currently not available", name)
            }
            OrderError::InvalidQuantity { index } => {
                write!(f, "Item {}: quantity must be a positive integer", index + 1)
            }
            OrderError::InvalidStatus { value } => {
                write!(
                    f,
                    "Invalid status '{}'. Must be one of: {}",
                    value,
                    OrderStatus::ALL
                        .iter()
                        .map(|s| s.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl OrderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::Empty => StatusCode::BAD_REQUEST,
            OrderError::UnknownMenuItem => StatusCode::BAD_REQUEST,
            OrderError::ItemUnavailable { .. } => StatusCode::BAD_REQUEST,
            OrderError::InvalidQuantity { .. } => StatusCode::BAD_REQUEST,
            OrderError::InvalidStatus { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::Empty => "EMPTY_ORDER",
            OrderError::UnknownMenuItem => "UNKNOWN_MENU_ITEM",
            OrderError::ItemUnavailable { .. } => "ITEM_UNAVAILABLE",
            OrderError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            OrderError::InvalidStatus { .. } => "INVALID_STATUS",
        }
    }
}

impl From<OrderError> for AdminError {
    fn from(err: OrderError) -> Self {
        AdminError::Order(err)
    }
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors related to menu catalog operations
#[derive(Debug)]
pub enum CatalogError {
    /// Menu item was not found
    NotFound { id: Uuid },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { id } => {
                write!(f, "Menu item with id '{}' not found", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::NotFound { .. } => "MENU_ITEM_NOT_FOUND",
        }
    }
}

impl From<CatalogError> for AdminError {
    fn from(err: CatalogError) -> Self {
        AdminError::Catalog(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// One or more field constraints were violated
    FieldErrors(Vec<FieldViolation>),
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "{}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for AdminError {
    fn from(err: ValidationError) -> Self {
        AdminError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the persistence backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A lock guarding shared state was poisoned by a panicked writer
    #[error("storage lock poisoned: {0}")]
    LockPoisoned(String),

    /// Backend unreachable or failed unexpectedly
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

impl From<StorageError> for AdminError {
    fn from(err: StorageError) -> Self {
        AdminError::Storage(err)
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for admin API operations
pub type AdminResult<T> = Result<T, AdminError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_not_found_display() {
        let err = OrderError::NotFound { id: Uuid::nil() };
        assert!(err.to_string().contains("not found"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "ORDER_NOT_FOUND");
    }

    #[test]
    fn test_invalid_status_lists_valid_set() {
        let err = OrderError::InvalidStatus {
            value: "Eaten".to_string(),
        };
        let msg = err.to_string();
        for status in ["Pending", "Preparing", "Ready", "Delivered", "Cancelled"] {
            assert!(msg.contains(status), "missing {} in '{}'", status, msg);
        }
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_item_unavailable_names_item() {
        let err = OrderError::ItemUnavailable {
            name: "Tiramisu".to_string(),
        };
        assert_eq!(err.to_string(), "Tiramisu is currently not available");

        let details = AdminError::from(err).to_response().details;
        assert_eq!(details, Some(serde_json::json!({ "item": "Tiramisu" })));
    }

    #[test]
    fn test_validation_error_concatenates_messages() {
        let err = ValidationError::FieldErrors(vec![
            FieldViolation::new("name", "Menu item name is required"),
            FieldViolation::new("price", "Price cannot be negative"),
        ]);
        assert_eq!(
            err.to_string(),
            "Menu item name is required, Price cannot be negative"
        );
    }

    #[test]
    fn test_storage_error_hides_internal_detail() {
        let err = AdminError::Storage(StorageError::Unavailable(
            "connection refused on 10.0.0.3:27017".to_string(),
        ));
        let response = err.to_response();
        assert_eq!(response.code, "PERSISTENCE_UNAVAILABLE");
        assert!(!response.message.contains("10.0.0.3"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_serialization() {
        let err = AdminError::Catalog(CatalogError::NotFound { id: Uuid::nil() });
        let response = err.to_response();
        assert!(!response.success);
        assert_eq!(response.code, "MENU_ITEM_NOT_FOUND");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_conversions_into_admin_error() {
        let err: AdminError = OrderError::Empty.into();
        assert_eq!(err.error_code(), "EMPTY_ORDER");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AdminError = StorageError::LockPoisoned("catalog".to_string()).into();
        assert_eq!(err.error_code(), "PERSISTENCE_UNAVAILABLE");
    }
}
