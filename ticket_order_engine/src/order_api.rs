//! The public face of the order engine.
//!
//! The server constructs one [`OrderApi`] at startup and shares it with the request handlers. The
//! api owns the backend handle; nothing else in the process holds a database reference.
use log::{debug, trace};

use crate::{
    db_types::{NewOrder, Order, SessionId},
    traits::{OrderStore, OrderStoreError},
};

#[derive(Debug, Clone)]
pub struct OrderApi<B> {
    db: B,
}

impl<B: OrderStore> OrderApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Appends one order record to the store and returns the assigned record id.
    pub async fn insert_order(&self, order: NewOrder) -> Result<i64, OrderStoreError> {
        debug!("🎫️ Recording order for session {}. {order}", order.session_id);
        let id = self.db.insert_order(order).await?;
        trace!("🎫️ Order recorded with id {id}");
        Ok(id)
    }

    /// Every record for the given checkout session. A session that was delivered more than once
    /// will return more than one record.
    pub async fn orders_for_session(&self, session_id: &SessionId) -> Result<Vec<Order>, OrderStoreError> {
        self.db.fetch_orders_for_session(session_id).await
    }

    pub async fn order_count(&self) -> Result<i64, OrderStoreError> {
        self.db.count_orders().await
    }
}
