use crate::{
    abstract_trait::product::{
        ProductQueryRepositoryTrait, RankingRow, VariantQueryRepositoryTrait,
    },
    model::product::{Product, ProductVariant},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const PRODUCT_COLUMNS: &str =
    "product_id, product_name, category, image_url, description, created_at, updated_at";
const VARIANT_COLUMNS: &str =
    "variant_id, product_id, size, color, price, stock, created_at, updated_at";

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching all products");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY product_id"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch products: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch product {product_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(product)
    }

    async fn find_variants(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<ProductVariant>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let variants = sqlx::query_as::<_, ProductVariant>(&format!(
            "SELECT {VARIANT_COLUMNS} FROM product_variants WHERE product_id = ANY($1) ORDER BY variant_id"
        ))
        .bind(product_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch variants: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(variants)
    }

    async fn find_ranking(&self, limit: i64) -> Result<Vec<RankingRow>, RepositoryError> {
        info!("🏆 Fetching top {limit} products by units sold");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows: Vec<(i32, i64)> = sqlx::query_as(
            r#"
            SELECT product_id, SUM(quantity)::BIGINT AS total_sold
            FROM order_items
            GROUP BY product_id
            ORDER BY total_sold DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch product ranking: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }
}

#[derive(Clone)]
pub struct VariantQueryRepository {
    db: ConnectionPool,
}

impl VariantQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VariantQueryRepositoryTrait for VariantQueryRepository {
    async fn find_by_id(
        &self,
        variant_id: i32,
    ) -> Result<Option<ProductVariant>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let variant = sqlx::query_as::<_, ProductVariant>(&format!(
            "SELECT {VARIANT_COLUMNS} FROM product_variants WHERE variant_id = $1"
        ))
        .bind(variant_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch variant {variant_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(variant)
    }
}
