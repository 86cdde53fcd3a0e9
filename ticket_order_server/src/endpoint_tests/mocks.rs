use mockall::mock;
use ticket_order_engine::{
    db_types::{NewOrder, Order, SessionId},
    traits::{OrderStore, OrderStoreError},
};

mock! {
    pub Store {}
    impl OrderStore for Store {
        async fn insert_order(&self, order: NewOrder) -> Result<i64, OrderStoreError>;
        async fn fetch_orders_for_session(&self, session_id: &SessionId) -> Result<Vec<Order>, OrderStoreError>;
        async fn count_orders(&self) -> Result<i64, OrderStoreError>;
    }
}
