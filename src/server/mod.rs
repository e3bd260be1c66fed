//! Application state and router assembly

use axum::Json;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::analytics;
use crate::catalog::handlers as menu;
use crate::catalog::memory::InMemoryCatalog;
use crate::catalog::store::CatalogStore;
use crate::config::Config;
use crate::orders::handlers as orders;
use crate::orders::memory::InMemoryOrders;
use crate::orders::sequence::{InMemorySequences, SequenceStore};
use crate::orders::service::OrderService;
use crate::orders::store::OrderStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    pub orders: Arc<dyn OrderStore>,
    pub order_service: OrderService,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        orders: Arc<dyn OrderStore>,
        sequences: Arc<dyn SequenceStore>,
    ) -> Self {
        let order_service = OrderService::new(catalog.clone(), orders.clone(), sequences);
        Self {
            catalog,
            orders,
            order_service,
        }
    }

    /// State backed entirely by in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCatalog::new()),
            Arc::new(InMemoryOrders::new()),
            Arc::new(InMemorySequences::new()),
        )
    }
}

/// Build the API router: all routes, no middleware
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/menu",
            get(menu::list_menu_items).post(menu::create_menu_item),
        )
        .route("/api/menu/search", get(menu::search_menu_items))
        .route(
            "/api/menu/{id}",
            get(menu::get_menu_item)
                .put(menu::update_menu_item)
                .delete(menu::delete_menu_item),
        )
        .route("/api/menu/{id}/availability", patch(menu::toggle_availability))
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/orders/{id}", get(orders::get_order))
        .route("/api/orders/{id}/status", patch(orders::update_order_status))
        .route("/api/analytics/top-sellers", get(analytics::get_top_sellers))
        .route("/api/analytics/stats", get(analytics::get_order_stats))
        .route("/api/health", get(health))
        .route("/", get(index))
        .fallback(not_found)
        .with_state(state)
}

/// Build the full application with CORS and request tracing
pub fn app(state: AppState, config: &Config) -> Router {
    let allow_origin = match &config.frontend_origin {
        Some(origin) => match origin.parse() {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "invalid FRONTEND_URL, allowing any origin");
                AllowOrigin::any()
            }
        },
        None => AllowOrigin::any(),
    };
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_origin(allow_origin);

    api_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "message": "Server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Restaurant Admin Dashboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "menu": "/api/menu",
            "orders": "/api/orders",
            "analytics": "/api/analytics",
            "health": "/api/health",
        },
    }))
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "message": format!("Route {} not found", uri.path()),
        })),
    )
}
