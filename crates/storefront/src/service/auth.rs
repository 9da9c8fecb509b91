use crate::{
    abstract_trait::{
        auth::AuthServiceTrait,
        customer::{DynCustomerCommandRepository, DynCustomerQueryRepository},
        employee::DynEmployeeQueryRepository,
    },
    domain::{
        actor::{Actor, ActorKind},
        requests::auth::{CreateCustomerRecordRequest, LoginRequest, RegisterRequest},
        response::{
            api::ApiResponse,
            auth::{AuthUserResponse, TokenResponse},
        },
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AuthService {
    customer_query: DynCustomerQueryRepository,
    customer_command: DynCustomerCommandRepository,
    employee_query: DynEmployeeQueryRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
    metrics: Arc<Mutex<Metrics>>,
}

pub struct AuthServiceDeps {
    pub customer_query: DynCustomerQueryRepository,
    pub customer_command: DynCustomerCommandRepository,
    pub employee_query: DynEmployeeQueryRepository,
    pub hashing: DynHashing,
    pub jwt: DynJwtService,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            customer_query,
            customer_command,
            employee_query,
            hashing,
            jwt,
            metrics,
            registry,
        } = deps;

        registry.lock().await.register(
            "auth_service_request_counter",
            "Total number of requests to the AuthService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "auth_service_request_duration",
            "Histogram of request durations for the AuthService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            customer_query,
            customer_command,
            employee_query,
            hashing,
            jwt,
            metrics,
        }
    }

    async fn record(&self, method: Method, status: Status, started: Instant) {
        self.metrics
            .lock()
            .await
            .record(method, status, started.elapsed().as_secs_f64());
    }

    async fn register_inner(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        if let Some(existing) = self.customer_query.find_by_email(&req.email).await? {
            warn!("⚠️ Registration rejected, email already in use: {}", existing.email);
            return Err(ServiceError::Custom("Email already in use".to_string()));
        }

        let password_hash = self.hashing.hash_password(&req.password).await?;

        let customer = self
            .customer_command
            .create_customer(&CreateCustomerRecordRequest {
                full_name: req.full_name.clone(),
                email: req.email.clone(),
                password_hash,
                gender: req.gender.clone(),
                phone: req.phone.clone(),
                address: req.address.clone(),
            })
            .await?;

        let token =
            self.jwt
                .generate_token(customer.customer_id as i64, "user", "access")?;

        info!("✅ Registered customer {}", customer.customer_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Registration successful".to_string(),
            data: TokenResponse {
                token,
                user: AuthUserResponse::from(customer),
            },
        })
    }

    /// Customers are looked up first, employees second. Both misses and
    /// hash mismatches collapse into the same InvalidCredentials.
    async fn login_inner(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let (user, password_hash, role, actor_id) =
            match self.customer_query.find_by_email(&req.email).await? {
                Some(customer) => {
                    let hash = customer.password_hash.clone();
                    let id = customer.customer_id;
                    (AuthUserResponse::from(customer), hash, "user", id)
                }
                None => match self.employee_query.find_by_email(&req.email).await? {
                    Some(employee) => {
                        let hash = employee.password_hash.clone();
                        let id = employee.employee_id;
                        (AuthUserResponse::from(employee), hash, "admin", id)
                    }
                    None => {
                        warn!("⚠️ Login failed, no account for email");
                        return Err(ServiceError::InvalidCredentials);
                    }
                },
            };

        self.hashing
            .compare_password(&password_hash, &req.password)
            .await
            .map_err(|_| ServiceError::InvalidCredentials)?;

        let token = self.jwt.generate_token(actor_id as i64, role, "access")?;

        info!("✅ Login successful for {role} {actor_id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            data: TokenResponse { token, user },
        })
    }

    async fn get_me_inner(
        &self,
        actor: &Actor,
    ) -> Result<ApiResponse<AuthUserResponse>, ServiceError> {
        let user = match actor.kind {
            ActorKind::Customer => self
                .customer_query
                .find_by_id(actor.id)
                .await?
                .map(AuthUserResponse::from),
            ActorKind::Employee => self
                .employee_query
                .find_by_id(actor.id)
                .await?
                .map(AuthUserResponse::from),
        }
        .ok_or(ServiceError::InvalidCredentials)?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Profile retrieved".to_string(),
            data: user,
        })
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.register_inner(req).await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(Method::Post, status, started).await;
        result
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.login_inner(req).await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(Method::Post, status, started).await;
        result
    }

    async fn get_me(&self, actor: &Actor) -> Result<ApiResponse<AuthUserResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.get_me_inner(actor).await;
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(Method::Get, status, started).await;
        result
    }
}
