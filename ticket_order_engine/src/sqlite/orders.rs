use sqlx::SqliteConnection;

use crate::{
    db_types::{NewOrder, Order, SessionId},
    traits::OrderStoreError,
};

/// Inserts a new order record using the given connection. This is a plain append. There is no
/// uniqueness check on `session_id`; a replayed notification results in a second row.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<i64, OrderStoreError> {
    let result = sqlx::query(
        r#"
            INSERT INTO orders (
                player_name,
                tickets,
                timestamp,
                session_id
            ) VALUES ($1, $2, $3, $4);
        "#,
    )
    .bind(&order.player_name)
    .bind(order.tickets.value())
    .bind(&order.timestamp)
    .bind(order.session_id.as_str())
    .execute(&mut *conn)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Returns all records for the given session id, oldest first.
pub async fn fetch_orders_for_session(
    session_id: &SessionId,
    conn: &mut SqliteConnection,
) -> Result<Vec<Order>, OrderStoreError> {
    let orders = sqlx::query_as::<_, Order>(
        r#"
            SELECT
                id,
                player_name,
                tickets,
                timestamp,
                session_id,
                created_at
            FROM orders
            WHERE session_id = $1
            ORDER BY id;
        "#,
    )
    .bind(session_id.as_str())
    .fetch_all(&mut *conn)
    .await?;
    Ok(orders)
}

pub async fn count_orders(conn: &mut SqliteConnection) -> Result<i64, OrderStoreError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders;").fetch_one(&mut *conn).await?;
    Ok(count)
}
