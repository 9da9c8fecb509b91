use crate::{
    abstract_trait::customer::{CustomerCommandRepositoryTrait, CustomerQueryRepositoryTrait},
    domain::requests::auth::CreateCustomerRecordRequest,
    model::customer::Customer,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const CUSTOMER_COLUMNS: &str = "customer_id, full_name, gender, email, phone, address, password_hash, created_at, updated_at";

pub struct CustomerQueryRepository {
    db: ConnectionPool,
}

impl CustomerQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for CustomerQueryRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch customer by email: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(customer)
    }

    async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE customer_id = $1"
        ))
        .bind(customer_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch customer {customer_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(customer)
    }
}

pub struct CustomerCommandRepository {
    db: ConnectionPool,
}

impl CustomerCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for CustomerCommandRepository {
    async fn create_customer(
        &self,
        req: &CreateCustomerRecordRequest,
    ) -> Result<Customer, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customers (full_name, gender, email, phone, address, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, current_timestamp, current_timestamp)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(&req.full_name)
        .bind(&req.gender)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.address)
        .bind(&req.password_hash)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create customer: {err:?}");
            match &err {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    RepositoryError::AlreadyExists("Email already in use".into())
                }
                _ => RepositoryError::from(err),
            }
        })?;

        info!("✅ Created customer {}", customer.customer_id);
        Ok(customer)
    }
}
