use async_trait::async_trait;
use std::sync::Arc;

use shared::errors::{RepositoryError, ServiceError};

use crate::{
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{
            api::ApiResponse,
            product::{ProductRankingResponse, ProductResponse},
        },
    },
    model::product::{Product, ProductCategory, ProductVariant},
};

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynVariantQueryRepository = Arc<dyn VariantQueryRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

/// (product_id, units sold) pairs, best sellers first.
pub type RankingRow = (i32, i64);

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_variants(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<ProductVariant>, RepositoryError>;
    async fn find_ranking(&self, limit: i64) -> Result<Vec<RankingRow>, RepositoryError>;
}

/// Row payload for product writes; category is already parsed.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub product_name: String,
    pub category: ProductCategory,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct VariantRecord {
    pub size: String,
    pub color: String,
    pub price: rust_decimal::Decimal,
    pub stock: i32,
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &ProductRecord) -> Result<Product, RepositoryError>;
    async fn update_product(
        &self,
        product_id: i32,
        req: &ProductRecord,
    ) -> Result<Product, RepositoryError>;
    async fn create_variants(
        &self,
        product_id: i32,
        variants: &[VariantRecord],
    ) -> Result<Vec<ProductVariant>, RepositoryError>;
    async fn delete_variants(&self, product_id: i32) -> Result<(), RepositoryError>;
    async fn delete_product(&self, product_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait VariantQueryRepositoryTrait {
    async fn find_by_id(&self, variant_id: i32)
    -> Result<Option<ProductVariant>, RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(&self, product_id: i32)
    -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn ranking(&self) -> Result<ApiResponse<Vec<ProductRankingResponse>>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        product_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(&self, product_id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
