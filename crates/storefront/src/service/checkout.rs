use crate::{
    abstract_trait::{
        checkout::{CheckoutServiceTrait, DynCheckoutCommandRepository},
        product::DynVariantQueryRepository,
    },
    domain::{
        actor::{Actor, ActorKind},
        requests::{
            checkout::CheckoutRequest,
            order::{PlaceOrderItemRecord, PlaceOrderRecordRequest},
        },
        response::checkout::CheckoutResponse,
    },
    model::payment::PaymentMethod,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use shared::{
    errors::CheckoutError,
    utils::{Method, Metrics, Status},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{info, warn};

#[derive(Clone)]
pub struct CheckoutService {
    variant_query: DynVariantQueryRepository,
    command: DynCheckoutCommandRepository,
    metrics: Arc<Mutex<Metrics>>,
}

pub struct CheckoutServiceDeps {
    pub variant_query: DynVariantQueryRepository,
    pub command: DynCheckoutCommandRepository,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

impl CheckoutService {
    pub async fn new(deps: CheckoutServiceDeps) -> Self {
        let CheckoutServiceDeps {
            variant_query,
            command,
            metrics,
            registry,
        } = deps;

        registry.lock().await.register(
            "checkout_service_request_counter",
            "Total number of requests to the CheckoutService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "checkout_service_request_duration",
            "Histogram of request durations for the CheckoutService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            variant_query,
            command,
            metrics,
        }
    }

    /// Turns the client cart into the transactional write set: verifies
    /// every (product, variant) pair, re-reads authoritative prices and
    /// totals them server-side.
    async fn build_record(
        &self,
        actor: &Actor,
        req: &CheckoutRequest,
    ) -> Result<PlaceOrderRecordRequest, CheckoutError> {
        if req.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut items = Vec::with_capacity(req.items.len());
        let mut total = Decimal::ZERO;

        for item in &req.items {
            if item.quantity < 1 {
                return Err(CheckoutError::InvalidInput(format!(
                    "Quantity must be at least 1, got {}",
                    item.quantity
                )));
            }

            let variant = self
                .variant_query
                .find_by_id(item.variant.variant_id)
                .await?
                .ok_or_else(|| {
                    CheckoutError::InvalidInput(format!(
                        "Unknown variant {}",
                        item.variant.variant_id
                    ))
                })?;

            if variant.product_id != item.product.product_id {
                return Err(CheckoutError::InvalidInput(format!(
                    "Variant {} does not belong to product {}",
                    item.variant.variant_id, item.product.product_id
                )));
            }

            if variant.price != item.variant.price {
                warn!(
                    "⚠️ Price snapshot mismatch for variant {}: client sent {}, charging {}",
                    variant.variant_id, item.variant.price, variant.price
                );
            }

            total += variant.price * Decimal::from(item.quantity);

            items.push(PlaceOrderItemRecord {
                product_id: item.product.product_id,
                variant_id: variant.variant_id,
                quantity: item.quantity,
                unit_price: variant.price,
            });
        }

        let payment_method = match PaymentMethod::parse(&req.payment_method) {
            Some(method) => method,
            None => {
                warn!(
                    "⚠️ Unknown payment method '{}', defaulting to Cash",
                    req.payment_method
                );
                PaymentMethod::Cash
            }
        };

        let (customer_id, employee_id) = match actor.kind {
            ActorKind::Customer => (Some(actor.id), None),
            ActorKind::Employee => (None, Some(actor.id)),
        };

        Ok(PlaceOrderRecordRequest {
            customer_id,
            employee_id,
            total_amount: total,
            payment_method,
            items,
        })
    }

    async fn process(
        &self,
        actor: &Actor,
        req: &CheckoutRequest,
    ) -> Result<CheckoutResponse, CheckoutError> {
        let record = self.build_record(actor, req).await?;
        let order = self.command.place_order(&record).await?;

        info!(
            "✅ Checkout complete: order {} for actor {} ({} item(s), total {})",
            order.order_id,
            actor.id,
            record.items.len(),
            record.total_amount
        );

        Ok(CheckoutResponse {
            success: true,
            order_id: order.order_id,
        })
    }
}

#[async_trait]
impl CheckoutServiceTrait for CheckoutService {
    async fn place_order(
        &self,
        actor: &Actor,
        req: &CheckoutRequest,
    ) -> Result<CheckoutResponse, CheckoutError> {
        let started = Instant::now();
        let result = self.process(actor, req).await;

        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .lock()
            .await
            .record(Method::Post, status, started.elapsed().as_secs_f64());

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            checkout::CheckoutCommandRepositoryTrait, product::VariantQueryRepositoryTrait,
        },
        domain::requests::checkout::{CheckoutItemRequest, ProductRef, VariantRef},
        model::{
            order::{Order, OrderStatus},
            product::ProductVariant,
        },
    };
    use chrono::Utc;
    use shared::errors::RepositoryError;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    struct MockVariantQueryRepository {
        variants: HashMap<i32, ProductVariant>,
    }

    #[async_trait]
    impl VariantQueryRepositoryTrait for MockVariantQueryRepository {
        async fn find_by_id(
            &self,
            variant_id: i32,
        ) -> Result<Option<ProductVariant>, RepositoryError> {
            Ok(self.variants.get(&variant_id).cloned())
        }
    }

    /// In-memory stand-in for the transactional repository. A single
    /// lock covers check plus decrement, mirroring the row locks the
    /// real transaction takes, and a failed check mutates nothing.
    #[derive(Default)]
    struct MockCheckoutRepository {
        inventory: StdMutex<HashMap<(i32, i32), i32>>,
        placed: StdMutex<Vec<PlaceOrderRecordRequest>>,
    }

    #[async_trait]
    impl CheckoutCommandRepositoryTrait for MockCheckoutRepository {
        async fn place_order(
            &self,
            req: &PlaceOrderRecordRequest,
        ) -> Result<Order, RepositoryError> {
            let mut inventory = self.inventory.lock().unwrap();

            for item in &req.items {
                if let Some(available) = inventory.get(&(item.product_id, item.variant_id)) {
                    if *available < item.quantity {
                        return Err(RepositoryError::InsufficientStock(item.product_id));
                    }
                }
            }
            for item in &req.items {
                if let Some(available) = inventory.get_mut(&(item.product_id, item.variant_id)) {
                    *available -= item.quantity;
                }
            }

            let mut placed = self.placed.lock().unwrap();
            placed.push(req.clone());
            let order_id = placed.len() as i32;

            Ok(Order {
                order_id,
                customer_id: req.customer_id,
                employee_id: req.employee_id,
                order_date: Utc::now().naive_utc(),
                status: OrderStatus::Pending,
                total_amount: req.total_amount,
                created_at: None,
                updated_at: None,
            })
        }
    }

    fn variant(variant_id: i32, product_id: i32, price: &str) -> ProductVariant {
        ProductVariant {
            variant_id,
            product_id,
            size: "M".into(),
            color: "Black".into(),
            price: price.parse().unwrap(),
            stock: 100,
            created_at: None,
            updated_at: None,
        }
    }

    async fn service(
        variants: Vec<ProductVariant>,
        repo: Arc<MockCheckoutRepository>,
    ) -> CheckoutService {
        let variants = variants
            .into_iter()
            .map(|v| (v.variant_id, v))
            .collect::<HashMap<_, _>>();

        CheckoutService::new(CheckoutServiceDeps {
            variant_query: Arc::new(MockVariantQueryRepository { variants }),
            command: repo,
            metrics: Arc::new(Mutex::new(Metrics::new())),
            registry: Arc::new(Mutex::new(Registry::default())),
        })
        .await
    }

    fn customer() -> Actor {
        Actor {
            id: 42,
            kind: ActorKind::Customer,
        }
    }

    fn cart_item(product_id: i32, variant_id: i32, price: &str, quantity: i32) -> CheckoutItemRequest {
        CheckoutItemRequest {
            product: ProductRef { product_id },
            variant: VariantRef {
                variant_id,
                price: price.parse().unwrap(),
            },
            quantity,
        }
    }

    fn request(items: Vec<CheckoutItemRequest>, payment_method: &str) -> CheckoutRequest {
        CheckoutRequest {
            items,
            payment_method: payment_method.into(),
        }
    }

    #[tokio::test]
    async fn empty_cart_is_rejected() {
        let repo = Arc::new(MockCheckoutRepository::default());
        let svc = service(vec![], repo.clone()).await;

        let err = svc
            .place_order(&customer(), &request(vec![], "Cash"))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::EmptyCart));
        assert!(repo.placed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_positive_quantity_is_invalid_input() {
        let repo = Arc::new(MockCheckoutRepository::default());
        let svc = service(vec![variant(1, 1, "10.00")], repo.clone()).await;

        let err = svc
            .place_order(&customer(), &request(vec![cart_item(1, 1, "10.00", 0)], "Cash"))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::InvalidInput(_)));
        assert!(repo.placed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_variant_is_invalid_input() {
        let repo = Arc::new(MockCheckoutRepository::default());
        let svc = service(vec![], repo.clone()).await;

        let err = svc
            .place_order(&customer(), &request(vec![cart_item(1, 99, "10.00", 1)], "Cash"))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn variant_of_another_product_is_invalid_input() {
        let repo = Arc::new(MockCheckoutRepository::default());
        let svc = service(vec![variant(7, 3, "10.00")], repo.clone()).await;

        let err = svc
            .place_order(&customer(), &request(vec![cart_item(5, 7, "10.00", 1)], "Cash"))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn stored_price_overrides_the_client_snapshot() {
        let repo = Arc::new(MockCheckoutRepository::default());
        let svc = service(vec![variant(1, 1, "19.99")], repo.clone()).await;

        let response = svc
            .place_order(&customer(), &request(vec![cart_item(1, 1, "0.01", 2)], "Cash"))
            .await
            .unwrap();

        assert!(response.success);

        let placed = repo.placed.lock().unwrap();
        assert_eq!(placed[0].items[0].unit_price, "19.99".parse().unwrap());
        assert_eq!(placed[0].total_amount, "39.98".parse().unwrap());
    }

    #[tokio::test]
    async fn unknown_payment_method_falls_back_to_cash() {
        let repo = Arc::new(MockCheckoutRepository::default());
        let svc = service(vec![variant(1, 1, "5.00")], repo.clone()).await;

        svc.place_order(&customer(), &request(vec![cart_item(1, 1, "5.00", 1)], "Bitcoin"))
            .await
            .unwrap();

        let placed = repo.placed.lock().unwrap();
        assert_eq!(placed[0].payment_method, PaymentMethod::Cash);
    }

    #[tokio::test]
    async fn customer_actor_owns_the_order() {
        let repo = Arc::new(MockCheckoutRepository::default());
        let svc = service(vec![variant(1, 1, "5.00")], repo.clone()).await;

        svc.place_order(&customer(), &request(vec![cart_item(1, 1, "5.00", 1)], "Cash"))
            .await
            .unwrap();

        let placed = repo.placed.lock().unwrap();
        assert_eq!(placed[0].customer_id, Some(42));
        assert_eq!(placed[0].employee_id, None);
    }

    #[tokio::test]
    async fn insufficient_stock_surfaces_the_product_and_mutates_nothing() {
        let repo = Arc::new(MockCheckoutRepository::default());
        repo.inventory.lock().unwrap().insert((1, 1), 3);
        let svc = service(vec![variant(1, 1, "5.00")], repo.clone()).await;

        let err = svc
            .place_order(&customer(), &request(vec![cart_item(1, 1, "5.00", 4)], "Cash"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::InsufficientInventory { product_id: 1 }
        ));
        assert_eq!(repo.inventory.lock().unwrap()[&(1, 1)], 3);
        assert!(repo.placed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_checkout_decrements_inventory() {
        let repo = Arc::new(MockCheckoutRepository::default());
        repo.inventory.lock().unwrap().insert((1, 1), 10);
        let svc = service(vec![variant(1, 1, "5.00")], repo.clone()).await;

        svc.place_order(&customer(), &request(vec![cart_item(1, 1, "5.00", 4)], "Cash"))
            .await
            .unwrap();

        assert_eq!(repo.inventory.lock().unwrap()[&(1, 1)], 6);
    }

    #[tokio::test]
    async fn untracked_pair_skips_the_stock_check() {
        let repo = Arc::new(MockCheckoutRepository::default());
        let svc = service(vec![variant(1, 1, "5.00")], repo.clone()).await;

        let response = svc
            .place_order(&customer(), &request(vec![cart_item(1, 1, "5.00", 50)], "Cash"))
            .await
            .unwrap();

        assert!(response.success);
    }

    #[tokio::test]
    async fn concurrent_checkouts_never_oversell() {
        let repo = Arc::new(MockCheckoutRepository::default());
        repo.inventory.lock().unwrap().insert((1, 1), 5);
        let svc = Arc::new(service(vec![variant(1, 1, "5.00")], repo.clone()).await);

        let mut handles = Vec::new();
        for _ in 0..2 {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                svc.place_order(&customer(), &request(vec![cart_item(1, 1, "5.00", 5)], "Cash"))
                    .await
            }));
        }

        let mut successes = 0;
        let mut insufficient = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(CheckoutError::InsufficientInventory { .. }) => insufficient += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(insufficient, 1);
        assert_eq!(repo.inventory.lock().unwrap()[&(1, 1)], 0);
    }
}
