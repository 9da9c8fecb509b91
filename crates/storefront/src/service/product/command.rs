use crate::{
    abstract_trait::product::{
        DynProductCommandRepository, ProductCommandServiceTrait, ProductRecord, VariantRecord,
    },
    domain::{
        requests::product::{CreateProductRequest, CreateVariantRequest, UpdateProductRequest},
        response::{api::ApiResponse, product::ProductResponse},
    },
    model::product::ProductCategory,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::info;

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Arc<Mutex<Metrics>>,
}

pub struct ProductCommandServiceDeps {
    pub command: DynProductCommandRepository,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

impl ProductCommandService {
    pub async fn new(deps: ProductCommandServiceDeps) -> Self {
        let ProductCommandServiceDeps {
            command,
            metrics,
            registry,
        } = deps;

        registry.lock().await.register(
            "product_command_service_request_counter",
            "Total number of requests to the ProductCommandService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "product_command_service_request_duration",
            "Histogram of request durations for the ProductCommandService",
            metrics.lock().await.request_duration.clone(),
        );

        Self { command, metrics }
    }

    async fn record(&self, method: Method, status: Status, started: Instant) {
        self.metrics
            .lock()
            .await
            .record(method, status, started.elapsed().as_secs_f64());
    }

    fn parse_category(category: &str) -> Result<ProductCategory, ServiceError> {
        ProductCategory::parse(category).ok_or_else(|| {
            ServiceError::Validation(vec![format!("Unknown category '{category}'")])
        })
    }

    fn variant_records(variants: &[CreateVariantRequest]) -> Vec<VariantRecord> {
        variants
            .iter()
            .map(|v| VariantRecord {
                size: v.size.clone(),
                color: v.color.clone(),
                price: v.price,
                stock: v.stock,
            })
            .collect()
    }

    async fn create_inner(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let category = Self::parse_category(&req.category)?;

        let product = self
            .command
            .create_product(&ProductRecord {
                product_name: req.product_name.clone(),
                category,
                image_url: req.image_url.clone(),
                description: req.description.clone(),
            })
            .await?;

        let variants = self
            .command
            .create_variants(product.product_id, &Self::variant_records(&req.variants))
            .await?;

        info!(
            "✅ Created product {} with {} variant(s)",
            product.product_id,
            variants.len()
        );

        Ok(ProductResponse::from_parts(product, variants))
    }

    /// Update replaces the whole variant set: existing variants are
    /// dropped and the submitted ones inserted fresh.
    async fn update_inner(
        &self,
        product_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let category = Self::parse_category(&req.category)?;

        let product = self
            .command
            .update_product(
                product_id,
                &ProductRecord {
                    product_name: req.product_name.clone(),
                    category,
                    image_url: req.image_url.clone(),
                    description: req.description.clone(),
                },
            )
            .await?;

        self.command.delete_variants(product_id).await?;
        let variants = self
            .command
            .create_variants(product_id, &Self::variant_records(&req.variants))
            .await?;

        info!("✅ Updated product {product_id}, variant set replaced");

        Ok(ProductResponse::from_parts(product, variants))
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.create_inner(req).await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(Method::Post, status, started).await;

        result.map(|data| ApiResponse {
            status: "success".to_string(),
            message: "Product created".to_string(),
            data,
        })
    }

    async fn update_product(
        &self,
        product_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.update_inner(product_id, req).await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(Method::Put, status, started).await;

        result.map(|data| ApiResponse {
            status: "success".to_string(),
            message: "Product updated".to_string(),
            data,
        })
    }

    async fn delete_product(&self, product_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let started = Instant::now();
        let result = self.command.delete_product(product_id).await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(Method::Delete, status, started).await;

        result?;
        info!("✅ Deleted product {product_id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::ProductCommandRepositoryTrait,
        model::product::{Product, ProductVariant},
    };
    use shared::errors::RepositoryError;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct MockProductCommand {
        created: StdMutex<Vec<ProductRecord>>,
        deleted_variant_sets: StdMutex<Vec<i32>>,
        deleted: StdMutex<Vec<i32>>,
        missing: bool,
    }

    #[async_trait]
    impl ProductCommandRepositoryTrait for MockProductCommand {
        async fn create_product(&self, req: &ProductRecord) -> Result<Product, RepositoryError> {
            self.created.lock().unwrap().push(req.clone());
            Ok(Product {
                product_id: 1,
                product_name: req.product_name.clone(),
                category: req.category,
                image_url: req.image_url.clone(),
                description: req.description.clone(),
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_product(
            &self,
            product_id: i32,
            req: &ProductRecord,
        ) -> Result<Product, RepositoryError> {
            if self.missing {
                return Err(RepositoryError::NotFound);
            }
            Ok(Product {
                product_id,
                product_name: req.product_name.clone(),
                category: req.category,
                image_url: req.image_url.clone(),
                description: req.description.clone(),
                created_at: None,
                updated_at: None,
            })
        }

        async fn create_variants(
            &self,
            product_id: i32,
            variants: &[VariantRecord],
        ) -> Result<Vec<ProductVariant>, RepositoryError> {
            Ok(variants
                .iter()
                .enumerate()
                .map(|(i, v)| ProductVariant {
                    variant_id: i as i32 + 1,
                    product_id,
                    size: v.size.clone(),
                    color: v.color.clone(),
                    price: v.price,
                    stock: v.stock,
                    created_at: None,
                    updated_at: None,
                })
                .collect())
        }

        async fn delete_variants(&self, product_id: i32) -> Result<(), RepositoryError> {
            self.deleted_variant_sets.lock().unwrap().push(product_id);
            Ok(())
        }

        async fn delete_product(&self, product_id: i32) -> Result<(), RepositoryError> {
            if self.missing {
                return Err(RepositoryError::NotFound);
            }
            self.deleted.lock().unwrap().push(product_id);
            Ok(())
        }
    }

    async fn service(mock: Arc<MockProductCommand>) -> ProductCommandService {
        ProductCommandService::new(ProductCommandServiceDeps {
            command: mock,
            metrics: Arc::new(Mutex::new(Metrics::new())),
            registry: Arc::new(Mutex::new(Registry::default())),
        })
        .await
    }

    fn create_request(category: &str) -> CreateProductRequest {
        CreateProductRequest {
            product_name: "Tee".into(),
            category: category.into(),
            image_url: None,
            description: None,
            variants: vec![CreateVariantRequest {
                size: "M".into(),
                color: "Black".into(),
                price: "29.99".parse().unwrap(),
                stock: 10,
            }],
        }
    }

    #[tokio::test]
    async fn create_persists_product_and_variants() {
        let mock = Arc::new(MockProductCommand::default());
        let svc = service(mock.clone()).await;

        let response = svc.create_product(&create_request("Men")).await.unwrap();

        assert_eq!(response.data.product_name, "Tee");
        assert_eq!(response.data.variants.len(), 1);
        assert_eq!(mock.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_category_fails_validation() {
        let mock = Arc::new(MockProductCommand::default());
        let svc = service(mock.clone()).await;

        let err = svc.create_product(&create_request("Shoes")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(mock.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_the_variant_set() {
        let mock = Arc::new(MockProductCommand::default());
        let svc = service(mock.clone()).await;

        let req = UpdateProductRequest {
            product_name: "Tee v2".into(),
            category: "Women".into(),
            image_url: None,
            description: None,
            variants: vec![CreateVariantRequest {
                size: "S".into(),
                color: "Red".into(),
                price: "19.99".parse().unwrap(),
                stock: 3,
            }],
        };

        let response = svc.update_product(7, &req).await.unwrap();

        assert_eq!(response.data.product_name, "Tee v2");
        assert_eq!(mock.deleted_variant_sets.lock().unwrap().as_slice(), &[7]);
    }

    #[tokio::test]
    async fn delete_of_missing_product_propagates_not_found() {
        let mock = Arc::new(MockProductCommand {
            missing: true,
            ..Default::default()
        });
        let svc = service(mock).await;

        let err = svc.delete_product(99).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
