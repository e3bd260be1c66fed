//! Order intake and lifecycle service
//!
//! Owns the multi-step creation invariant: line validation, batch catalog
//! resolution, availability checks, authoritative pricing from current
//! catalog prices, order number allocation, and the final persist. Nothing
//! durable happens before the counter increment, and nothing besides the
//! counter survives a failed creation.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::model::MenuItem;
use crate::catalog::store::CatalogStore;
use crate::core::error::{AdminResult, OrderError};
use crate::orders::model::{CreateOrderRequest, Order, OrderLine, OrderStatus};
use crate::orders::sequence::{ORDER_NUMBER_SEQUENCE, SequenceStore, format_order_number};
use crate::orders::store::{OrderFilter, OrderPage, OrderStore};

/// Coordinates the catalog, the order store, and the sequence counter
#[derive(Clone)]
pub struct OrderService {
    catalog: Arc<dyn CatalogStore>,
    orders: Arc<dyn OrderStore>,
    sequences: Arc<dyn SequenceStore>,
}

impl OrderService {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        orders: Arc<dyn OrderStore>,
        sequences: Arc<dyn SequenceStore>,
    ) -> Self {
        Self {
            catalog,
            orders,
            sequences,
        }
    }

    /// Create an order from an intake request
    ///
    /// All validation runs before any durable write. The counter increment is
    /// the one exception: if the final persist fails after allocation, the
    /// sequence keeps a permanent gap and the number is never reused.
    pub async fn create_order(&self, request: CreateOrderRequest) -> AdminResult<Order> {
        if request.items.is_empty() {
            return Err(OrderError::Empty.into());
        }

        // Quantities are checked before any catalog lookup. The conversion
        // doubles as the upper bound: anything outside 1..=u32::MAX fails.
        let mut lines: Vec<(Uuid, u32)> = Vec::with_capacity(request.items.len());
        for (index, line) in request.items.iter().enumerate() {
            let quantity = line
                .quantity
                .filter(|q| *q > 0)
                .and_then(|q| u32::try_from(q).ok());
            match quantity {
                Some(quantity) => lines.push((line.menu_item, quantity)),
                None => return Err(OrderError::InvalidQuantity { index }.into()),
            }
        }

        request.validate_fields()?;

        // One batch lookup; each referenced item is read exactly once and the
        // snapshot is used for both availability and pricing.
        let mut distinct: Vec<Uuid> = lines.iter().map(|(id, _)| *id).collect();
        distinct.sort_unstable();
        distinct.dedup();
        let resolved = self.catalog.fetch_many(&distinct).await?;
        if resolved.len() < distinct.len() {
            return Err(OrderError::UnknownMenuItem.into());
        }
        let by_id: HashMap<Uuid, MenuItem> =
            resolved.into_iter().map(|item| (item.id, item)).collect();

        let mut items = Vec::with_capacity(lines.len());
        let mut total_amount = 0.0;
        for (menu_item_id, quantity) in lines {
            let Some(menu_item) = by_id.get(&menu_item_id) else {
                return Err(OrderError::UnknownMenuItem.into());
            };
            if !menu_item.is_available {
                return Err(OrderError::ItemUnavailable {
                    name: menu_item.name.clone(),
                }
                .into());
            }
            total_amount += menu_item.price * quantity as f64;
            items.push(OrderLine {
                menu_item: menu_item_id,
                name: menu_item.name.clone(),
                quantity,
                price: menu_item.price,
            });
        }

        let seq = self.sequences.next(ORDER_NUMBER_SEQUENCE).await?;
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            order_number: format_order_number(now.date_naive(), seq),
            items,
            total_amount,
            status: OrderStatus::Pending,
            customer_name: request.customer_name.trim().to_string(),
            table_number: request.table_number.map(|t| t as u32),
            created_at: now,
            updated_at: now,
        };

        let order = self.orders.insert(order).await?;
        tracing::info!(
            order_number = %order.order_number,
            total = order.total_amount,
            "order created"
        );
        Ok(order)
    }

    /// Get an order by id
    pub async fn get_order(&self, id: &Uuid) -> AdminResult<Order> {
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound { id: *id }.into())
    }

    /// List orders matching the filter
    pub async fn list_orders(&self, filter: &OrderFilter) -> AdminResult<OrderPage> {
        Ok(self.orders.list(filter).await?)
    }

    /// Overwrite an order's status
    ///
    /// Any status may move to any other status; setting the current status
    /// again is a no-op update.
    pub async fn update_status(&self, id: &Uuid, status: OrderStatus) -> AdminResult<Order> {
        let updated = self
            .orders
            .update_status(id, status)
            .await?
            .ok_or(OrderError::NotFound { id: *id })?;
        tracing::info!(order_number = %updated.order_number, status = %status, "order status updated");
        Ok(updated)
    }
}
