//! Sales analytics: top sellers and order statistics
//!
//! Aggregates are computed from the full order collection in one pass.
//! Revenue figures always exclude cancelled orders; line contributions use
//! the prices frozen at order time, not current catalog prices.

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::catalog::model::{Category, MenuItem};
use crate::core::error::AdminError;
use crate::orders::model::{Order, OrderStatus};
use crate::server::AppState;

const TOP_SELLER_LIMIT: usize = 5;

/// One entry in the top-sellers report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSeller {
    pub id: Uuid,
    /// Current catalog name, falling back to the name frozen on the order
    /// lines when the item has since been deleted
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub total_quantity: u64,
    pub total_revenue: f64,
    pub order_count: u64,
}

/// Per-status slice of the order statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStat {
    pub status: OrderStatus,
    pub count: u64,
    pub total_revenue: f64,
}

/// Order statistics report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub status_breakdown: Vec<StatusStat>,
    pub total_orders: usize,
    pub today_orders: usize,
    pub today_revenue: f64,
}

#[derive(Debug, Serialize)]
pub struct TopSellersResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<TopSeller>,
}

#[derive(Debug, Serialize)]
pub struct OrderStatsResponse {
    pub success: bool,
    pub data: OrderStats,
}

#[derive(Default)]
struct SellerAccumulator {
    frozen_name: String,
    total_quantity: u64,
    total_revenue: f64,
    order_count: u64,
}

/// Rank menu items by quantity sold across non-cancelled orders
pub fn top_sellers(orders: &[Order], catalog_items: &[MenuItem]) -> Vec<TopSeller> {
    let mut accumulators: HashMap<Uuid, SellerAccumulator> = HashMap::new();
    for order in orders {
        if order.status == OrderStatus::Cancelled {
            continue;
        }
        for line in &order.items {
            let entry = accumulators.entry(line.menu_item).or_default();
            if entry.frozen_name.is_empty() {
                entry.frozen_name = line.name.clone();
            }
            entry.total_quantity += line.quantity as u64;
            entry.total_revenue += line.price * line.quantity as f64;
            entry.order_count += 1;
        }
    }

    let current: HashMap<Uuid, &MenuItem> =
        catalog_items.iter().map(|item| (item.id, item)).collect();

    let mut sellers: Vec<TopSeller> = accumulators
        .into_iter()
        .map(|(id, acc)| {
            let item = current.get(&id);
            TopSeller {
                id,
                name: item
                    .map(|i| i.name.clone())
                    .unwrap_or(acc.frozen_name),
                category: item.map(|i| i.category),
                price: item.map(|i| i.price),
                image_url: item.and_then(|i| i.image_url.clone()),
                total_quantity: acc.total_quantity,
                total_revenue: acc.total_revenue,
                order_count: acc.order_count,
            }
        })
        .collect();

    sellers.sort_by(|a, b| {
        b.total_quantity
            .cmp(&a.total_quantity)
            .then_with(|| a.name.cmp(&b.name))
    });
    sellers.truncate(TOP_SELLER_LIMIT);
    sellers
}

/// Compute the order statistics report as of `now`
pub fn order_stats(orders: &[Order], now: DateTime<Utc>) -> OrderStats {
    let today_start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc();

    let mut breakdown: HashMap<OrderStatus, StatusStat> = HashMap::new();
    let mut today_orders = 0;
    let mut today_revenue = 0.0;
    for order in orders {
        let entry = breakdown
            .entry(order.status)
            .or_insert_with(|| StatusStat {
                status: order.status,
                count: 0,
                total_revenue: 0.0,
            });
        entry.count += 1;
        entry.total_revenue += order.total_amount;

        if order.created_at >= today_start {
            today_orders += 1;
            if order.status != OrderStatus::Cancelled {
                today_revenue += order.total_amount;
            }
        }
    }

    // Stable lifecycle ordering for the response
    let status_breakdown = OrderStatus::ALL
        .iter()
        .filter_map(|status| breakdown.remove(status))
        .collect();

    OrderStats {
        status_breakdown,
        total_orders: orders.len(),
        today_orders,
        today_revenue,
    }
}

/// GET /api/analytics/top-sellers
pub async fn get_top_sellers(
    State(state): State<AppState>,
) -> Result<Json<TopSellersResponse>, AdminError> {
    let orders = state.orders.list_all().await?;

    let mut ids: Vec<Uuid> = orders
        .iter()
        .flat_map(|o| o.items.iter().map(|l| l.menu_item))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    let catalog_items = state.catalog.fetch_many(&ids).await?;

    let sellers = top_sellers(&orders, &catalog_items);
    Ok(Json(TopSellersResponse {
        success: true,
        count: sellers.len(),
        data: sellers,
    }))
}

/// GET /api/analytics/stats
pub async fn get_order_stats(
    State(state): State<AppState>,
) -> Result<Json<OrderStatsResponse>, AdminError> {
    let orders = state.orders.list_all().await?;
    Ok(Json(OrderStatsResponse {
        success: true,
        data: order_stats(&orders, Utc::now()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::model::OrderLine;
    use chrono::Duration;

    fn order(status: OrderStatus, lines: Vec<(Uuid, &str, u32, f64)>, age_hours: i64) -> Order {
        let created = Utc::now() - Duration::hours(age_hours);
        let items: Vec<OrderLine> = lines
            .into_iter()
            .map(|(menu_item, name, quantity, price)| OrderLine {
                menu_item,
                name: name.to_string(),
                quantity,
                price,
            })
            .collect();
        let total_amount = items.iter().map(|l| l.price * l.quantity as f64).sum();
        Order {
            id: Uuid::new_v4(),
            order_number: "ORD-20240101-0001".to_string(),
            items,
            total_amount,
            status,
            customer_name: "Test".to_string(),
            table_number: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_top_sellers_ranks_by_quantity_and_excludes_cancelled() {
        let soup = Uuid::new_v4();
        let cake = Uuid::new_v4();
        let orders = vec![
            order(OrderStatus::Delivered, vec![(soup, "Soup", 5, 4.0)], 1),
            order(OrderStatus::Pending, vec![(cake, "Cake", 2, 6.0)], 1),
            order(OrderStatus::Cancelled, vec![(cake, "Cake", 50, 6.0)], 1),
        ];

        let sellers = top_sellers(&orders, &[]);
        assert_eq!(sellers.len(), 2);
        assert_eq!(sellers[0].name, "Soup");
        assert_eq!(sellers[0].total_quantity, 5);
        assert_eq!(sellers[0].total_revenue, 20.0);
        assert_eq!(sellers[1].total_quantity, 2);
    }

    #[test]
    fn test_top_sellers_caps_at_five() {
        let orders: Vec<Order> = (0..8)
            .map(|n| {
                order(
                    OrderStatus::Delivered,
                    vec![(Uuid::new_v4(), "Item", n + 1, 1.0)],
                    1,
                )
            })
            .collect();
        let sellers = top_sellers(&orders, &[]);
        assert_eq!(sellers.len(), 5);
        // Highest quantities survive the cut
        assert_eq!(sellers[0].total_quantity, 8);
        assert_eq!(sellers[4].total_quantity, 4);
    }

    #[test]
    fn test_top_sellers_falls_back_to_frozen_name() {
        let deleted = Uuid::new_v4();
        let orders = vec![order(
            OrderStatus::Delivered,
            vec![(deleted, "Retired Dish", 1, 10.0)],
            1,
        )];
        // Catalog no longer knows the item
        let sellers = top_sellers(&orders, &[]);
        assert_eq!(sellers[0].name, "Retired Dish");
        assert!(sellers[0].category.is_none());
        assert!(sellers[0].price.is_none());
    }

    #[test]
    fn test_order_counts_line_occurrences() {
        let soup = Uuid::new_v4();
        let orders = vec![
            order(OrderStatus::Delivered, vec![(soup, "Soup", 1, 4.0)], 1),
            order(OrderStatus::Delivered, vec![(soup, "Soup", 3, 4.0)], 1),
        ];
        let sellers = top_sellers(&orders, &[]);
        assert_eq!(sellers[0].order_count, 2);
        assert_eq!(sellers[0].total_quantity, 4);
    }

    #[test]
    fn test_stats_breakdown_and_today_revenue() {
        // Fixed clock so the midnight boundary is unambiguous
        let now = chrono::DateTime::parse_from_rfc3339("2024-03-05T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let item = Uuid::new_v4();
        let mut orders = vec![
            order(OrderStatus::Delivered, vec![(item, "Soup", 1, 10.0)], 0),
            order(OrderStatus::Delivered, vec![(item, "Soup", 1, 20.0)], 0),
            order(OrderStatus::Cancelled, vec![(item, "Soup", 1, 30.0)], 0),
        ];
        orders[0].created_at = now - Duration::hours(1);
        orders[1].created_at = now - Duration::hours(60);
        orders[2].created_at = now - Duration::hours(1);

        let stats = order_stats(&orders, now);
        assert_eq!(stats.total_orders, 3);

        let delivered = stats
            .status_breakdown
            .iter()
            .find(|s| s.status == OrderStatus::Delivered)
            .unwrap();
        assert_eq!(delivered.count, 2);
        assert_eq!(delivered.total_revenue, 30.0);

        // The 60-hour-old order is outside today; the cancelled one counts as
        // an order today but contributes no revenue.
        assert_eq!(stats.today_orders, 2);
        assert_eq!(stats.today_revenue, 10.0);
    }

    #[test]
    fn test_stats_empty_collection() {
        let stats = order_stats(&[], Utc::now());
        assert!(stats.status_breakdown.is_empty());
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.today_revenue, 0.0);
    }
}
