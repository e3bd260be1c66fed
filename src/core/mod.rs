//! Core building blocks: typed errors and field validation

pub mod error;
pub mod query;
pub mod validation;

pub use error::{
    AdminError, AdminResult, CatalogError, ErrorResponse, FieldViolation, OrderError,
    StorageError, ValidationError,
};
