use crate::{
    abstract_trait::product::{ProductCommandRepositoryTrait, ProductRecord, VariantRecord},
    model::product::{Product, ProductVariant},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const PRODUCT_COLUMNS: &str =
    "product_id, product_name, category, image_url, description, created_at, updated_at";
const VARIANT_COLUMNS: &str =
    "variant_id, product_id, size, color, price, stock, created_at, updated_at";

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, req: &ProductRecord) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (product_name, category, image_url, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&req.product_name)
        .bind(req.category)
        .bind(&req.image_url)
        .bind(&req.description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product: {err:?}");
            RepositoryError::from(err)
        })?;

        info!("✅ Created product {}", product.product_id);
        Ok(product)
    }

    async fn update_product(
        &self,
        product_id: i32,
        req: &ProductRecord,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET product_name = $2, category = $3, image_url = $4, description = $5,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product_id)
        .bind(&req.product_name)
        .bind(req.category)
        .bind(&req.image_url)
        .bind(&req.description)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {product_id}: {err:?}");
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("✅ Updated product {product_id}");
        Ok(product)
    }

    async fn create_variants(
        &self,
        product_id: i32,
        variants: &[VariantRecord],
    ) -> Result<Vec<ProductVariant>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let mut created = Vec::with_capacity(variants.len());
        for variant in variants {
            let row = sqlx::query_as::<_, ProductVariant>(&format!(
                r#"
                INSERT INTO product_variants (product_id, size, color, price, stock, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
                RETURNING {VARIANT_COLUMNS}
                "#
            ))
            .bind(product_id)
            .bind(&variant.size)
            .bind(&variant.color)
            .bind(variant.price)
            .bind(variant.stock)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to create variant for product {product_id}: {err:?}");
                match &err {
                    sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                        RepositoryError::ForeignKey(format!("Product {product_id} not found"))
                    }
                    _ => RepositoryError::from(err),
                }
            })?;
            created.push(row);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created {} variant(s) for product {product_id}",
            created.len()
        );
        Ok(created)
    }

    async fn delete_variants(&self, product_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM product_variants WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete variants of product {product_id}: {err:?}");
                RepositoryError::from(err)
            })?;

        Ok(())
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM product_variants WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product {product_id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Deleted product {product_id}");
        Ok(())
    }
}
