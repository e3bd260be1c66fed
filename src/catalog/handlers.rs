//! HTTP handlers for menu catalog operations

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::model::{Category, CreateMenuItem, MenuItem, UpdateMenuItem};
use crate::catalog::store::MenuFilter;
use crate::core::error::{AdminError, CatalogError, FieldViolation, ValidationError};
use crate::core::query::SortOrder;
use crate::server::AppState;

/// Query parameters for `GET /api/menu`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuListQuery {
    pub category: Option<String>,
    pub is_available: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

/// Query parameters for `GET /api/menu/search`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<MenuItem>,
}

#[derive(Debug, Serialize)]
pub struct MenuItemResponse {
    pub success: bool,
    pub data: MenuItem,
}

#[derive(Debug, Serialize)]
pub struct MenuItemDeletedResponse {
    pub success: bool,
    pub message: String,
    pub data: MenuItem,
}

/// GET /api/menu
pub async fn list_menu_items(
    State(state): State<AppState>,
    Query(query): Query<MenuListQuery>,
) -> Result<Json<MenuListResponse>, AdminError> {
    // An unknown category string matches nothing rather than failing the
    // request, matching the storage-level filter semantics of the original.
    let category = match query.category.as_deref() {
        Some(raw) => match Category::parse(raw) {
            Some(category) => Some(category),
            None => {
                return Ok(Json(MenuListResponse {
                    success: true,
                    count: 0,
                    data: Vec::new(),
                }));
            }
        },
        None => None,
    };

    let filter = MenuFilter {
        category,
        is_available: query.is_available,
        min_price: query.min_price,
        max_price: query.max_price,
        sort_by: query.sort_by,
        order: query.order,
    };
    let items = state.catalog.list(&filter).await?;
    Ok(Json(MenuListResponse {
        success: true,
        count: items.len(),
        data: items,
    }))
}

/// GET /api/menu/search
pub async fn search_menu_items(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<MenuListResponse>, AdminError> {
    let q = query.q.unwrap_or_default();
    if q.trim().is_empty() {
        return Err(ValidationError::FieldErrors(vec![FieldViolation::new(
            "q",
            "Search query is required",
        )])
        .into());
    }
    let items = state.catalog.search(q.trim()).await?;
    Ok(Json(MenuListResponse {
        success: true,
        count: items.len(),
        data: items,
    }))
}

/// GET /api/menu/{id}
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MenuItemResponse>, AdminError> {
    let item = state
        .catalog
        .get(&id)
        .await?
        .ok_or(CatalogError::NotFound { id })?;
    Ok(Json(MenuItemResponse {
        success: true,
        data: item,
    }))
}

/// POST /api/menu
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuItem>,
) -> Result<impl IntoResponse, AdminError> {
    payload.validate()?;
    let item = state.catalog.insert(payload.into_item()).await?;
    tracing::info!(id = %item.id, name = %item.name, "menu item created");
    Ok((
        StatusCode::CREATED,
        Json(MenuItemResponse {
            success: true,
            data: item,
        }),
    ))
}

/// PUT /api/menu/{id}
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMenuItem>,
) -> Result<Json<MenuItemResponse>, AdminError> {
    payload.validate()?;
    let mut item = state
        .catalog
        .get(&id)
        .await?
        .ok_or(CatalogError::NotFound { id })?;
    payload.apply(&mut item);
    let item = state
        .catalog
        .update(&id, item)
        .await?
        .ok_or(CatalogError::NotFound { id })?;
    Ok(Json(MenuItemResponse {
        success: true,
        data: item,
    }))
}

/// DELETE /api/menu/{id}
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MenuItemDeletedResponse>, AdminError> {
    let item = state
        .catalog
        .delete(&id)
        .await?
        .ok_or(CatalogError::NotFound { id })?;
    tracing::info!(id = %item.id, name = %item.name, "menu item deleted");
    Ok(Json(MenuItemDeletedResponse {
        success: true,
        message: "Menu item deleted successfully".to_string(),
        data: item,
    }))
}

/// PATCH /api/menu/{id}/availability
pub async fn toggle_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MenuItemResponse>, AdminError> {
    let mut item = state
        .catalog
        .get(&id)
        .await?
        .ok_or(CatalogError::NotFound { id })?;
    item.is_available = !item.is_available;
    item.updated_at = chrono::Utc::now();
    let item = state
        .catalog
        .update(&id, item)
        .await?
        .ok_or(CatalogError::NotFound { id })?;
    Ok(Json(MenuItemResponse {
        success: true,
        data: item,
    }))
}
