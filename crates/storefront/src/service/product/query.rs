use crate::{
    abstract_trait::product::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::response::{
        api::ApiResponse,
        product::{ProductRankingResponse, ProductResponse},
    },
    model::product::ProductVariant,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status},
};
use std::{collections::HashMap, sync::Arc};
use tokio::{sync::Mutex, time::Instant};
use tracing::info;

const RANKING_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
}

pub struct ProductQueryServiceDeps {
    pub query: DynProductQueryRepository,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

impl ProductQueryService {
    pub async fn new(deps: ProductQueryServiceDeps) -> Self {
        let ProductQueryServiceDeps {
            query,
            metrics,
            registry,
        } = deps;

        registry.lock().await.register(
            "product_query_service_request_counter",
            "Total number of requests to the ProductQueryService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "product_query_service_request_duration",
            "Histogram of request durations for the ProductQueryService",
            metrics.lock().await.request_duration.clone(),
        );

        Self { query, metrics }
    }

    async fn record(&self, status: Status, started: Instant) {
        self.metrics
            .lock()
            .await
            .record(Method::Get, status, started.elapsed().as_secs_f64());
    }

    fn group_variants(variants: Vec<ProductVariant>) -> HashMap<i32, Vec<ProductVariant>> {
        let mut grouped: HashMap<i32, Vec<ProductVariant>> = HashMap::new();
        for variant in variants {
            grouped.entry(variant.product_id).or_default().push(variant);
        }
        grouped
    }

    async fn find_all_inner(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.query.find_all().await?;
        let ids: Vec<i32> = products.iter().map(|p| p.product_id).collect();
        let mut grouped = Self::group_variants(self.query.find_variants(&ids).await?);

        Ok(products
            .into_iter()
            .map(|product| {
                let variants = grouped.remove(&product.product_id).unwrap_or_default();
                ProductResponse::from_parts(product, variants)
            })
            .collect())
    }

    async fn find_by_id_inner(&self, product_id: i32) -> Result<ProductResponse, ServiceError> {
        let product = self
            .query
            .find_by_id(product_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let variants = self.query.find_variants(&[product_id]).await?;

        Ok(ProductResponse::from_parts(product, variants))
    }

    async fn ranking_inner(&self) -> Result<Vec<ProductRankingResponse>, ServiceError> {
        let rows = self.query.find_ranking(RANKING_LIMIT).await?;
        let ids: Vec<i32> = rows.iter().map(|(product_id, _)| *product_id).collect();
        let mut grouped = Self::group_variants(self.query.find_variants(&ids).await?);

        let mut ranking = Vec::with_capacity(rows.len());
        for (product_id, total_sold) in rows {
            // A sold-out-and-removed product can still appear in old
            // order items; skip it rather than fail the whole ranking.
            let Some(product) = self.query.find_by_id(product_id).await? else {
                info!("Ranked product {product_id} no longer exists, skipping");
                continue;
            };
            let variants = grouped.remove(&product_id).unwrap_or_default();
            ranking.push(ProductRankingResponse {
                product: ProductResponse::from_parts(product, variants),
                total_sold,
            });
        }

        Ok(ranking)
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let started = Instant::now();
        let result = self.find_all_inner().await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(status, started).await;

        result.map(|data| ApiResponse {
            status: "success".to_string(),
            message: "Products retrieved".to_string(),
            data,
        })
    }

    async fn find_by_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.find_by_id_inner(product_id).await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(status, started).await;

        result.map(|data| ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved".to_string(),
            data,
        })
    }

    async fn ranking(&self) -> Result<ApiResponse<Vec<ProductRankingResponse>>, ServiceError> {
        let started = Instant::now();
        let result = self.ranking_inner().await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(status, started).await;

        result.map(|data| ApiResponse {
            status: "success".to_string(),
            message: "Top products retrieved".to_string(),
            data,
        })
    }
}
