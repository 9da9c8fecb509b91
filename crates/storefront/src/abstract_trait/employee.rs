use async_trait::async_trait;
use std::sync::Arc;

use shared::errors::RepositoryError;

use crate::model::employee::Employee;

pub type DynEmployeeQueryRepository = Arc<dyn EmployeeQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait EmployeeQueryRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError>;
    async fn find_by_id(&self, employee_id: i32) -> Result<Option<Employee>, RepositoryError>;
}
