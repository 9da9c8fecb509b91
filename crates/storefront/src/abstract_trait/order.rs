use async_trait::async_trait;
use std::sync::Arc;

use shared::errors::{RepositoryError, ServiceError};

use crate::{
    domain::{
        actor::Actor,
        response::{api::ApiResponse, order::OrderDetailResponse},
    },
    model::{
        order::{Order, OrderItem},
        payment::Payment,
    },
};

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, RepositoryError>;
    async fn find_items_by_order(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError>;
    async fn find_payment_by_order(&self, order_id: i32)
    -> Result<Option<Payment>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_by_id(
        &self,
        actor: &Actor,
        order_id: i32,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError>;
}
