//! HTTP handlers for order intake and management

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::{AdminError, OrderError};
use crate::core::query::SortOrder;
use crate::orders::model::{CreateOrderRequest, Order, OrderStatus, UpdateStatusRequest};
use crate::orders::store::OrderFilter;
use crate::server::AppState;

/// Query parameters for `GET /api/orders`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    pub success: bool,
    pub count: usize,
    pub total: usize,
    pub total_pages: usize,
    pub current_page: u32,
    pub data: Vec<Order>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub success: bool,
    pub data: Order,
}

/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<OrderListResponse>, AdminError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).max(1);

    // An unknown status string matches nothing rather than failing the
    // request, same as the category filter on the menu listing.
    let status = match query.status.as_deref() {
        Some(raw) => match OrderStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                return Ok(Json(OrderListResponse {
                    success: true,
                    count: 0,
                    total: 0,
                    total_pages: 0,
                    current_page: page,
                    data: Vec::new(),
                }));
            }
        },
        None => None,
    };

    let filter = OrderFilter {
        status,
        page,
        limit,
        sort_by: query.sort_by,
        order: query.order,
    };
    let page_result = state.order_service.list_orders(&filter).await?;
    Ok(Json(OrderListResponse {
        success: true,
        count: page_result.orders.len(),
        total: page_result.total,
        total_pages: page_result.total.div_ceil(limit as usize),
        current_page: page,
        data: page_result.orders,
    }))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, AdminError> {
    let order = state.order_service.get_order(&id).await?;
    Ok(Json(OrderResponse {
        success: true,
        data: order,
    }))
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, AdminError> {
    let order = state.order_service.create_order(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            success: true,
            data: order,
        }),
    ))
}

/// PATCH /api/orders/{id}/status
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<OrderResponse>, AdminError> {
    let status = OrderStatus::parse(&payload.status).ok_or(OrderError::InvalidStatus {
        value: payload.status,
    })?;
    let order = state.order_service.update_status(&id, status).await?;
    Ok(Json(OrderResponse {
        success: true,
        data: order,
    }))
}
