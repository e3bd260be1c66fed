//! # Restaurant Admin API
//!
//! Back-office REST service for a restaurant: menu catalog management, order
//! intake and lifecycle tracking, and basic sales analytics, consumed by a
//! single-page dashboard.
//!
//! ## Architecture
//!
//! - **Catalog**: menu item records behind the [`catalog::CatalogStore`]
//!   trait; leaf component with no dependencies.
//! - **Orders**: order intake depends on the catalog to validate and price
//!   line items, owns a monotonic sequence for human-readable order numbers,
//!   and owns the status lifecycle.
//! - **Analytics**: aggregate queries over the order collection.
//!
//! Line prices are always re-derived from current catalog prices at order
//! creation; client-supplied prices are not representable in the intake
//! payload. Order numbers come from an atomically incremented named counter,
//! so two concurrent creations can never share a number.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use restaurant_admin::prelude::*;
//!
//! let state = AppState::in_memory();
//! let app = server::app(state, &Config::load());
//! axum::serve(listener, app).await?;
//! ```

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod core;
pub mod orders;
pub mod seed;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::catalog::{
        Category, CreateMenuItem, InMemoryCatalog, MenuFilter, MenuItem, UpdateMenuItem,
        store::CatalogStore,
    };
    pub use crate::config::Config;
    pub use crate::core::{
        AdminError, AdminResult, CatalogError, ErrorResponse, FieldViolation, OrderError,
        StorageError, ValidationError,
    };
    pub use crate::orders::{
        CreateOrderRequest, InMemoryOrders, InMemorySequences, Order, OrderFilter, OrderLine,
        OrderService, OrderStatus, OrderStore, SequenceStore, format_order_number,
    };
    pub use crate::seed::seed_catalog;
    pub use crate::server::{AppState, api_router, app};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
