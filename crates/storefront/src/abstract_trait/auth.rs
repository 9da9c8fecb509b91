use async_trait::async_trait;
use std::sync::Arc;

use shared::errors::ServiceError;

use crate::{
    domain::{
        actor::Actor,
        requests::auth::{LoginRequest, RegisterRequest},
        response::{
            api::ApiResponse,
            auth::{AuthUserResponse, TokenResponse},
        },
    },
};

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(&self, req: &RegisterRequest)
    -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn get_me(&self, actor: &Actor) -> Result<ApiResponse<AuthUserResponse>, ServiceError>;
}
