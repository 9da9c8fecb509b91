use crate::{
    abstract_trait::order::OrderQueryRepositoryTrait,
    model::{
        order::{Order, OrderItem},
        payment::Payment,
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, customer_id, employee_id, order_date, status, total_amount, created_at, updated_at
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order {order_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(order)
    }

    async fn find_items_by_order(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT order_item_id, order_id, product_id, variant_id, quantity, unit_price
            FROM order_items
            WHERE order_id = $1
            ORDER BY order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch items for order {order_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(items)
    }

    async fn find_payment_by_order(
        &self,
        order_id: i32,
    ) -> Result<Option<Payment>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT payment_id, order_id, amount, payment_method, status
            FROM payments
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch payment for order {order_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(payment)
    }
}
