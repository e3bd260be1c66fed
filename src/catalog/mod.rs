//! Menu catalog: model, store, and HTTP handlers

pub mod handlers;
pub mod memory;
pub mod model;
pub mod store;

pub use memory::InMemoryCatalog;
pub use model::{Category, CreateMenuItem, MenuItem, UpdateMenuItem};
pub use store::{CatalogStore, MenuFilter};
