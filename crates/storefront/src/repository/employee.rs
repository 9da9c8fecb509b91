use crate::{abstract_trait::employee::EmployeeQueryRepositoryTrait, model::employee::Employee};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

const EMPLOYEE_COLUMNS: &str =
    "employee_id, full_name, email, password_hash, role, hire_date, created_at";

pub struct EmployeeQueryRepository {
    db: ConnectionPool,
}

impl EmployeeQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeQueryRepositoryTrait for EmployeeQueryRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch employee by email: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(employee)
    }

    async fn find_by_id(&self, employee_id: i32) -> Result<Option<Employee>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = $1"
        ))
        .bind(employee_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch employee {employee_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(employee)
    }
}
