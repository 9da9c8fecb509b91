use crate::{
    abstract_trait::checkout::CheckoutCommandRepositoryTrait,
    domain::requests::order::PlaceOrderRecordRequest,
    model::{
        inventory::Inventory,
        order::{Order, OrderStatus},
        payment::PaymentStatus,
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

pub struct CheckoutCommandRepository {
    db: ConnectionPool,
}

impl CheckoutCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckoutCommandRepositoryTrait for CheckoutCommandRepository {
    /// Runs the whole placement inside one transaction. Any early return
    /// drops the transaction, which rolls back every write made so far.
    async fn place_order(&self, req: &PlaceOrderRecordRequest) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (customer_id, employee_id, order_date, status, total_amount, created_at, updated_at)
            VALUES ($1, $2, current_timestamp, $3, $4, current_timestamp, current_timestamp)
            RETURNING order_id, customer_id, employee_id, order_date, status, total_amount, created_at, updated_at
            "#,
        )
        .bind(req.customer_id)
        .bind(req.employee_id)
        .bind(OrderStatus::Pending)
        .bind(req.total_amount)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order row: {err:?}");
            RepositoryError::from(err)
        })?;

        for item in &req.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, variant_id, quantity, unit_price)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(order.order_id)
            .bind(item.product_id)
            .bind(item.variant_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create order item for order {}: {err:?}",
                    order.order_id
                );
                RepositoryError::from(err)
            })?;
        }

        // Lock each inventory row before checking it so two concurrent
        // placements against the same variant serialize here instead of
        // both passing the sufficiency check.
        for item in &req.items {
            let tracked = sqlx::query_as::<_, Inventory>(
                r#"
                SELECT inventory_id, product_id, variant_id, quantity, last_updated
                FROM inventory
                WHERE product_id = $1 AND variant_id = $2
                FOR UPDATE
                "#,
            )
            .bind(item.product_id)
            .bind(item.variant_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            match tracked {
                Some(row) if row.quantity < item.quantity => {
                    warn!(
                        "⚠️ Insufficient stock for product {} variant {}: requested={}, available={}",
                        item.product_id, item.variant_id, item.quantity, row.quantity
                    );
                    return Err(RepositoryError::InsufficientStock(item.product_id));
                }
                Some(_) => {
                    sqlx::query(
                        r#"
                        UPDATE inventory
                        SET quantity = quantity - $3, last_updated = current_date
                        WHERE product_id = $1 AND variant_id = $2
                        "#,
                    )
                    .bind(item.product_id)
                    .bind(item.variant_id)
                    .bind(item.quantity)
                    .execute(&mut *tx)
                    .await
                    .map_err(RepositoryError::from)?;
                }
                None => {
                    // Untracked pair: absence of an inventory row is not
                    // an error, the order proceeds without a stock check.
                    info!(
                        "No inventory row for product {} variant {}, skipping stock check",
                        item.product_id, item.variant_id
                    );
                }
            }
        }

        sqlx::query(
            r#"
            INSERT INTO payments (order_id, amount, payment_method, status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(order.order_id)
        .bind(req.total_amount)
        .bind(req.payment_method)
        .bind(PaymentStatus::Pending)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create payment for order {}: {err:?}",
                order.order_id
            );
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Placed order {} with {} item(s), total {}",
            order.order_id,
            req.items.len(),
            order.total_amount
        );
        Ok(order)
    }
}
