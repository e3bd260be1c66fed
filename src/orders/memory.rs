//! In-memory implementation of the order store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::core::error::StorageError;
use crate::orders::model::{Order, OrderStatus};
use crate::orders::store::{OrderFilter, OrderPage, OrderStore};

/// In-memory order store
#[derive(Clone, Default)]
pub struct InMemoryOrders {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<Uuid, Order>>, StorageError> {
        self.orders
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Order>>, StorageError> {
        self.orders
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }
}

#[async_trait]
impl OrderStore for InMemoryOrders {
    async fn insert(&self, order: Order) -> Result<Order, StorageError> {
        self.write()?.insert(order.id, order.clone());
        Ok(order)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Order>, StorageError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn list(&self, filter: &OrderFilter) -> Result<OrderPage, StorageError> {
        let mut orders: Vec<Order> = self
            .read()?
            .values()
            .filter(|order| filter.status.is_none_or(|s| order.status == s))
            .cloned()
            .collect();

        match filter.sort_by.as_deref() {
            Some("totalAmount") => {
                orders.sort_by(|a, b| filter.order.apply(a.total_amount.total_cmp(&b.total_amount)))
            }
            Some("orderNumber") => {
                orders.sort_by(|a, b| filter.order.apply(a.order_number.cmp(&b.order_number)))
            }
            // Absent sortBy falls back to createdAt; the direction parameter
            // still applies, with descending (newest first) as its default.
            _ => orders.sort_by(|a, b| filter.order.apply(a.created_at.cmp(&b.created_at))),
        }

        let total = orders.len();
        let limit = filter.limit.max(1) as usize;
        let skip = (filter.page.max(1) as usize - 1) * limit;
        let orders = orders.into_iter().skip(skip).take(limit).collect();
        Ok(OrderPage { orders, total })
    }

    async fn update_status(
        &self,
        id: &Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, StorageError> {
        let mut orders = self.write()?;
        Ok(orders.get_mut(id).map(|order| {
            order.status = status;
            order.updated_at = chrono::Utc::now();
            order.clone()
        }))
    }

    async fn list_all(&self) -> Result<Vec<Order>, StorageError> {
        Ok(self.read()?.values().cloned().collect())
    }
}
