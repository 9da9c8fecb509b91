use async_trait::async_trait;
use std::sync::Arc;

use shared::errors::RepositoryError;

use crate::{domain::requests::auth::CreateCustomerRecordRequest, model::customer::Customer};

pub type DynCustomerQueryRepository = Arc<dyn CustomerQueryRepositoryTrait + Send + Sync>;
pub type DynCustomerCommandRepository = Arc<dyn CustomerCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError>;
    async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>, RepositoryError>;
}

#[async_trait]
pub trait CustomerCommandRepositoryTrait {
    async fn create_customer(
        &self,
        req: &CreateCustomerRecordRequest,
    ) -> Result<Customer, RepositoryError>;
}
