//! Catalog store trait and its query types

use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::model::{Category, MenuItem};
use crate::core::error::StorageError;
use crate::core::query::SortOrder;

/// Filter and sort criteria for catalog listings
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub category: Option<Category>,
    pub is_available: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Sort field: `name`, `price`, `preparationTime`, or `createdAt`
    pub sort_by: Option<String>,
    pub order: SortOrder,
}

/// Persisted collection of menu items
///
/// Implementations provide CRUD plus the batch lookup the order service uses
/// to validate and price line items. The API is agnostic to the underlying
/// storage mechanism.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert a new menu item
    async fn insert(&self, item: MenuItem) -> Result<MenuItem, StorageError>;

    /// Get a menu item by id
    async fn get(&self, id: &Uuid) -> Result<Option<MenuItem>, StorageError>;

    /// Batch lookup by id set, returning exactly the subset that exists
    ///
    /// Each returned item carries its current price and availability; callers
    /// read each referenced item once and never re-read mid-computation.
    async fn fetch_many(&self, ids: &[Uuid]) -> Result<Vec<MenuItem>, StorageError>;

    /// List menu items matching the filter, sorted per the filter
    async fn list(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, StorageError>;

    /// Case-insensitive text search over name, description, and ingredients
    async fn search(&self, query: &str) -> Result<Vec<MenuItem>, StorageError>;

    /// Replace an existing item, returning `None` when the id is unknown
    async fn update(&self, id: &Uuid, item: MenuItem) -> Result<Option<MenuItem>, StorageError>;

    /// Delete an item, returning the removed record when it existed
    async fn delete(&self, id: &Uuid) -> Result<Option<MenuItem>, StorageError>;
}
