use async_trait::async_trait;
use std::sync::Arc;

use shared::errors::{CheckoutError, RepositoryError};

use crate::{
    domain::{
        actor::Actor,
        requests::{checkout::CheckoutRequest, order::PlaceOrderRecordRequest},
        response::checkout::CheckoutResponse,
    },
    model::order::Order,
};

pub type DynCheckoutCommandRepository = Arc<dyn CheckoutCommandRepositoryTrait + Send + Sync>;
pub type DynCheckoutService = Arc<dyn CheckoutServiceTrait + Send + Sync>;

/// The transactional write set of order placement: order, items,
/// inventory decrements and payment commit together or not at all.
#[async_trait]
pub trait CheckoutCommandRepositoryTrait {
    async fn place_order(&self, req: &PlaceOrderRecordRequest) -> Result<Order, RepositoryError>;
}

/// Returns the bare confirmation body the frontend consumes; this
/// endpoint does not use the envelope the other responses carry.
#[async_trait]
pub trait CheckoutServiceTrait {
    async fn place_order(
        &self,
        actor: &Actor,
        req: &CheckoutRequest,
    ) -> Result<CheckoutResponse, CheckoutError>;
}
