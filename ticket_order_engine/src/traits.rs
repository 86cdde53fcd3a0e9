//! The storage contract for the ticket order gateway.
//!
//! Backends implement [`OrderStore`]; everything above this trait is backend-agnostic. The trait
//! is deliberately small: the gateway only ever appends records, and the two read methods exist
//! for diagnostics and tests rather than for any user-facing surface.
use thiserror::Error;

use crate::db_types::{NewOrder, Order, SessionId};

#[derive(Debug, Clone, Error)]
pub enum OrderStoreError {
    #[error("Could not connect to the order store. {0}")]
    ConnectionError(String),
    #[error("Could not run the order store migrations. {0}")]
    MigrationError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for OrderStoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}

/// The `OrderStore` trait defines the behaviour of an order-record backend.
///
/// `insert_order` is intentionally not idempotent. The processor does not guarantee single
/// delivery, and the system records every delivery it accepts; deduplication by session id is a
/// product decision that has explicitly not been taken.
#[allow(async_fn_in_trait)]
pub trait OrderStore {
    /// Appends one order record and returns the id assigned by the backend.
    async fn insert_order(&self, order: NewOrder) -> Result<i64, OrderStoreError>;

    /// Returns every record for the given checkout session, in insertion order.
    async fn fetch_orders_for_session(&self, session_id: &SessionId) -> Result<Vec<Order>, OrderStoreError>;

    /// Total number of records in the store.
    async fn count_orders(&self) -> Result<i64, OrderStoreError>;
}
