//! Monotonic sequence counters and order number formatting
//!
//! Order numbers are minted from a shared named counter. The increment and
//! the read-back happen in one atomic step; two concurrent order creations
//! can never observe the same value. A creation that fails after allocation
//! leaves a gap in the sequence, which is accepted; duplicates are not.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::core::error::StorageError;

/// Counter name used for order numbers
pub const ORDER_NUMBER_SEQUENCE: &str = "orderNumber";

/// Source of named, strictly increasing integers
///
/// Counters are implicitly created on first use with initial value 0, so the
/// first allocated value is 1. Implementations must perform the
/// increment-and-read as a single atomic read-modify-write, never a separate
/// read followed by a write.
#[async_trait]
pub trait SequenceStore: Send + Sync {
    /// Atomically increment the named counter and return the new value
    async fn next(&self, name: &str) -> Result<u64, StorageError>;
}

/// In-memory sequence store
///
/// A single mutex guards the whole map, making each increment-and-read one
/// critical section.
#[derive(Clone, Default)]
pub struct InMemorySequences {
    counters: Arc<Mutex<HashMap<String, u64>>>,
}

impl InMemorySequences {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SequenceStore for InMemorySequences {
    async fn next(&self, name: &str) -> Result<u64, StorageError> {
        let mut counters = self
            .counters
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        let value = counters.entry(name.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }
}

/// Format an order number from its creation date and sequence value
///
/// `ORD-YYYYMMDD-NNNN`, with the sequence zero-padded to 4 digits. Values
/// beyond 9999 print with more digits; there is no overflow failure.
pub fn format_order_number(date: NaiveDate, seq: u64) -> String {
    format!("ORD-{}-{:04}", date.format("%Y%m%d"), seq)
}
