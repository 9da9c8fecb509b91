use crate::{
    abstract_trait::order::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        actor::{Actor, ActorKind},
        response::{
            api::ApiResponse,
            order::{OrderDetailResponse, OrderItemResponse, OrderResponse, PaymentResponse},
        },
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::warn;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
}

pub struct OrderQueryServiceDeps {
    pub query: DynOrderQueryRepository,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

impl OrderQueryService {
    pub async fn new(deps: OrderQueryServiceDeps) -> Self {
        let OrderQueryServiceDeps {
            query,
            metrics,
            registry,
        } = deps;

        registry.lock().await.register(
            "order_query_service_request_counter",
            "Total number of requests to the OrderQueryService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "order_query_service_request_duration",
            "Histogram of request durations for the OrderQueryService",
            metrics.lock().await.request_duration.clone(),
        );

        Self { query, metrics }
    }

    async fn find_by_id_inner(
        &self,
        actor: &Actor,
        order_id: i32,
    ) -> Result<OrderDetailResponse, ServiceError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        // Customers only see their own orders; employees see all.
        if actor.kind == ActorKind::Customer && order.customer_id != Some(actor.id) {
            warn!(
                "⚠️ Customer {} attempted to read foreign order {order_id}",
                actor.id
            );
            return Err(ServiceError::Forbidden(
                "You do not have access to this order".to_string(),
            ));
        }

        let items = self.query.find_items_by_order(order_id).await?;
        let payment = self.query.find_payment_by_order(order_id).await?;

        Ok(OrderDetailResponse {
            order: OrderResponse::from(order),
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            payment: payment.map(PaymentResponse::from),
        })
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_by_id(
        &self,
        actor: &Actor,
        order_id: i32,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.find_by_id_inner(actor, order_id).await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .lock()
            .await
            .record(Method::Get, status, started.elapsed().as_secs_f64());

        result.map(|data| ApiResponse {
            status: "success".to_string(),
            message: "Order retrieved".to_string(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::order::OrderQueryRepositoryTrait,
        model::{
            order::{Order, OrderItem, OrderStatus},
            payment::{Payment, PaymentMethod, PaymentStatus},
        },
    };
    use chrono::Utc;

    struct MockOrderQuery {
        order: Option<Order>,
        items: Vec<OrderItem>,
        payment: Option<Payment>,
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for MockOrderQuery {
        async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, RepositoryError> {
            Ok(self
                .order
                .clone()
                .filter(|order| order.order_id == order_id))
        }

        async fn find_items_by_order(
            &self,
            _order_id: i32,
        ) -> Result<Vec<OrderItem>, RepositoryError> {
            Ok(self.items.clone())
        }

        async fn find_payment_by_order(
            &self,
            _order_id: i32,
        ) -> Result<Option<Payment>, RepositoryError> {
            Ok(self.payment.clone())
        }
    }

    fn order(order_id: i32, customer_id: Option<i32>) -> Order {
        Order {
            order_id,
            customer_id,
            employee_id: None,
            order_date: Utc::now().naive_utc(),
            status: OrderStatus::Pending,
            total_amount: "39.98".parse().unwrap(),
            created_at: None,
            updated_at: None,
        }
    }

    async fn service(mock: MockOrderQuery) -> OrderQueryService {
        OrderQueryService::new(OrderQueryServiceDeps {
            query: Arc::new(mock),
            metrics: Arc::new(Mutex::new(Metrics::new())),
            registry: Arc::new(Mutex::new(Registry::default())),
        })
        .await
    }

    fn actor(id: i32, kind: ActorKind) -> Actor {
        Actor { id, kind }
    }

    #[tokio::test]
    async fn owner_reads_the_full_order() {
        let svc = service(MockOrderQuery {
            order: Some(order(1, Some(42))),
            items: vec![OrderItem {
                order_item_id: 1,
                order_id: 1,
                product_id: 1,
                variant_id: 1,
                quantity: 2,
                unit_price: "19.99".parse().unwrap(),
            }],
            payment: Some(Payment {
                payment_id: 1,
                order_id: 1,
                amount: "39.98".parse().unwrap(),
                payment_method: PaymentMethod::Cash,
                status: PaymentStatus::Pending,
            }),
        })
        .await;

        let response = svc
            .find_by_id(&actor(42, ActorKind::Customer), 1)
            .await
            .unwrap();

        assert_eq!(response.data.order.order_id, 1);
        assert_eq!(response.data.items.len(), 1);
        assert!(response.data.payment.is_some());
    }

    #[tokio::test]
    async fn foreign_order_is_forbidden_for_customers() {
        let svc = service(MockOrderQuery {
            order: Some(order(1, Some(42))),
            items: vec![],
            payment: None,
        })
        .await;

        let err = svc
            .find_by_id(&actor(7, ActorKind::Customer), 1)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn employees_read_any_order() {
        let svc = service(MockOrderQuery {
            order: Some(order(1, Some(42))),
            items: vec![],
            payment: None,
        })
        .await;

        let response = svc
            .find_by_id(&actor(7, ActorKind::Employee), 1)
            .await
            .unwrap();

        assert_eq!(response.data.order.order_id, 1);
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let svc = service(MockOrderQuery {
            order: None,
            items: vec![],
            payment: None,
        })
        .await;

        let err = svc
            .find_by_id(&actor(7, ActorKind::Employee), 1)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
