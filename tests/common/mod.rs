//! Shared helpers for API integration tests

use axum_test::TestServer;
use serde_json::{Value, json};

use restaurant_admin::server::{AppState, api_router};

pub fn test_server() -> TestServer {
    TestServer::new(api_router(AppState::in_memory()))
}

/// Create a menu item through the API, returning its JSON representation
pub async fn create_menu_item(
    server: &TestServer,
    name: &str,
    category: &str,
    price: f64,
    available: bool,
) -> Value {
    let response = server
        .post("/api/menu")
        .json(&json!({
            "name": name,
            "category": category,
            "price": price,
            "isAvailable": available,
            "ingredients": ["salt", "pepper"],
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}

/// Create an order for one menu item through the API
pub async fn create_order(server: &TestServer, menu_item_id: &str, quantity: i64) -> Value {
    let response = server
        .post("/api/orders")
        .json(&json!({
            "customerName": "Dana",
            "tableNumber": 4,
            "items": [{ "menuItem": menu_item_id, "quantity": quantity }],
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}
