//! Order intake, numbering, lifecycle, and HTTP handlers

pub mod handlers;
pub mod memory;
pub mod model;
pub mod sequence;
pub mod service;
pub mod store;

pub use memory::InMemoryOrders;
pub use model::{CreateOrderRequest, Order, OrderLine, OrderStatus};
pub use sequence::{InMemorySequences, SequenceStore, format_order_number};
pub use service::OrderService;
pub use store::{OrderFilter, OrderPage, OrderStore};
