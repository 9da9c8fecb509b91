use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub employee_id: i32,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub hire_date: NaiveDate,
    pub created_at: Option<NaiveDateTime>,
}
