use crate::{
    abstract_trait::{
        auth::DynAuthService,
        checkout::{DynCheckoutCommandRepository, DynCheckoutService},
        customer::{DynCustomerCommandRepository, DynCustomerQueryRepository},
        employee::DynEmployeeQueryRepository,
        order::{DynOrderQueryRepository, DynOrderQueryService},
        product::{
            DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
            DynProductQueryService, DynVariantQueryRepository,
        },
    },
    repository::{
        CheckoutCommandRepository, CustomerCommandRepository, CustomerQueryRepository,
        EmployeeQueryRepository, OrderQueryRepository, ProductCommandRepository,
        ProductQueryRepository, VariantQueryRepository,
    },
    service::{
        AuthService, AuthServiceDeps, CheckoutService, CheckoutServiceDeps, OrderQueryService,
        OrderQueryServiceDeps, ProductCommandService, ProductCommandServiceDeps,
        ProductQueryService, ProductQueryServiceDeps,
    },
};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::ConnectionPool,
    utils::Metrics,
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub checkout_service: DynCheckoutService,
    pub order_query: DynOrderQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("checkout_service", &"CheckoutService")
            .field("order_query", &"OrderQueryService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            registry,
        } = deps;

        let customer_query: DynCustomerQueryRepository =
            Arc::new(CustomerQueryRepository::new(pool.clone()));
        let customer_command: DynCustomerCommandRepository =
            Arc::new(CustomerCommandRepository::new(pool.clone()));
        let employee_query: DynEmployeeQueryRepository =
            Arc::new(EmployeeQueryRepository::new(pool.clone()));
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let variant_query: DynVariantQueryRepository =
            Arc::new(VariantQueryRepository::new(pool.clone()));
        let checkout_command: DynCheckoutCommandRepository =
            Arc::new(CheckoutCommandRepository::new(pool.clone()));
        let order_query_repo: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));

        // Each service registers its own counter and histogram family.
        let auth_service = Arc::new(
            AuthService::new(AuthServiceDeps {
                customer_query,
                customer_command,
                employee_query,
                hashing: hash,
                jwt: jwt_config,
                metrics: Arc::new(Mutex::new(Metrics::new())),
                registry: registry.clone(),
            })
            .await,
        ) as DynAuthService;

        let product_query = Arc::new(
            ProductQueryService::new(ProductQueryServiceDeps {
                query: product_query_repo,
                metrics: Arc::new(Mutex::new(Metrics::new())),
                registry: registry.clone(),
            })
            .await,
        ) as DynProductQueryService;

        let product_command = Arc::new(
            ProductCommandService::new(ProductCommandServiceDeps {
                command: product_command_repo,
                metrics: Arc::new(Mutex::new(Metrics::new())),
                registry: registry.clone(),
            })
            .await,
        ) as DynProductCommandService;

        let checkout_service = Arc::new(
            CheckoutService::new(CheckoutServiceDeps {
                variant_query,
                command: checkout_command,
                metrics: Arc::new(Mutex::new(Metrics::new())),
                registry: registry.clone(),
            })
            .await,
        ) as DynCheckoutService;

        let order_query = Arc::new(
            OrderQueryService::new(OrderQueryServiceDeps {
                query: order_query_repo,
                metrics: Arc::new(Mutex::new(Metrics::new())),
                registry,
            })
            .await,
        ) as DynOrderQueryService;

        Self {
            auth_service,
            product_query,
            product_command,
            checkout_service,
            order_query,
        }
    }
}
