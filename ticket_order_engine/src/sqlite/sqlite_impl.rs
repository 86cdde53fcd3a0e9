//! `SqliteOrderStore` is the concrete order store that ships with the gateway.
//!
//! It holds a connection pool that is opened once at process start. Handlers only ever see the
//! [`OrderStore`] trait; the pool is never reconfigured at request time.
use std::fmt::Debug;

use sqlx::SqlitePool;

use super::{db, orders};
use crate::{
    db_types::{NewOrder, Order, SessionId},
    traits::{OrderStore, OrderStoreError},
};

#[derive(Clone)]
pub struct SqliteOrderStore {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteOrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteOrderStore ({:?})", self.pool)
    }
}

impl SqliteOrderStore {
    /// Opens (creating if necessary) the database at `url` with a pool of `max_connections`.
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, OrderStoreError> {
        let pool = db::new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<(), OrderStoreError> {
        db::run_migrations(&self.pool).await
    }
}

impl OrderStore for SqliteOrderStore {
    async fn insert_order(&self, order: NewOrder) -> Result<i64, OrderStoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::insert_order(order, &mut conn).await
    }

    async fn fetch_orders_for_session(&self, session_id: &SessionId) -> Result<Vec<Order>, OrderStoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_orders_for_session(session_id, &mut conn).await
    }

    async fn count_orders(&self) -> Result<i64, OrderStoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::count_orders(&mut conn).await
    }
}
