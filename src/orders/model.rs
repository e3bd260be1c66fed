//! Order model, lifecycle statuses, and intake payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::ValidationError;
use crate::core::validation::{check, in_range, max_length, required_string};

/// Fixed set of order lifecycle statuses
///
/// Transitions are deliberately unguarded: any status may move to any other
/// status, including re-entering the current one. This mirrors how the floor
/// staff actually correct mistakes (a Delivered order marked back to Pending
/// after a mix-up) and is intentional, not an oversight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order
///
/// `name` and `price` are frozen at order creation so historical orders stay
/// accurate even if the catalog entry later changes or is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item: Uuid,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// A persisted order
///
/// Line items and `total_amount` are immutable after creation; `status` is
/// the only field that mutates, via explicit transition requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    /// Human-readable identifier, `ORD-YYYYMMDD-NNNN`
    pub order_number: String,
    pub items: Vec<OrderLine>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One requested line in an intake payload
///
/// There is no price field here on purpose: line prices are always derived
/// from the catalog, never trusted from the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub menu_item: Uuid,
    pub quantity: Option<i64>,
}

/// Payload for `POST /api/orders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_name: String,
    pub table_number: Option<i64>,
    #[serde(default)]
    pub items: Vec<OrderLineRequest>,
}

impl CreateOrderRequest {
    /// Validate customer name and table number constraints
    ///
    /// Line items are checked separately by the order service, which owns the
    /// quantity and catalog rules.
    pub fn validate_fields(&self) -> Result<(), ValidationError> {
        let mut violations = vec![
            required_string("customerName", &self.customer_name, "Customer name"),
            max_length(
                "customerName",
                self.customer_name.trim(),
                "Customer name",
                100,
            ),
        ];
        if let Some(table) = self.table_number {
            violations.push(in_range("tableNumber", table, "Table number", 1, 100));
        }
        check(violations)
    }
}

/// Payload for `PATCH /api/orders/{id}/status`
///
/// `status` stays a raw string so an unknown value surfaces as the
/// `INVALID_STATUS` error enumerating the valid set, not a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
}
