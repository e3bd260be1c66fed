//! Order store trait and its query types

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::StorageError;
use crate::core::query::SortOrder;
use crate::orders::model::{Order, OrderStatus};

/// Filter, sort, and pagination criteria for order listings
#[derive(Debug, Clone)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    /// 1-based page index
    pub page: u32,
    pub limit: u32,
    /// Sort field: `createdAt`, `totalAmount`, or `orderNumber`
    pub sort_by: Option<String>,
    pub order: SortOrder,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            status: None,
            page: 1,
            limit: 10,
            sort_by: None,
            order: SortOrder::Desc,
        }
    }
}

/// One page of orders plus the total match count before pagination
#[derive(Debug, Clone)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    pub total: usize,
}

/// Persisted collection of orders
///
/// Orders have no deletion path; the only mutation after insert is the
/// status overwrite.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert a newly created order
    async fn insert(&self, order: Order) -> Result<Order, StorageError>;

    /// Get an order by id
    async fn get(&self, id: &Uuid) -> Result<Option<Order>, StorageError>;

    /// List orders matching the filter, paginated
    async fn list(&self, filter: &OrderFilter) -> Result<OrderPage, StorageError>;

    /// Overwrite the status of an order, returning `None` when the id is
    /// unknown; no other field besides `updated_at` changes
    async fn update_status(
        &self,
        id: &Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, StorageError>;

    /// All orders, unfiltered, for aggregate queries
    async fn list_all(&self) -> Result<Vec<Order>, StorageError>;
}
