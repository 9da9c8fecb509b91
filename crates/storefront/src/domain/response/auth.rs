use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{customer::Customer, employee::Employee};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthUserResponse {
    pub id: i32,
    pub email: String,
    pub role: String,
    pub full_name: String,
}

impl From<Customer> for AuthUserResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.customer_id,
            email: customer.email,
            role: "user".into(),
            full_name: customer.full_name,
        }
    }
}

impl From<Employee> for AuthUserResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.employee_id,
            email: employee.email,
            role: "admin".into(),
            full_name: employee.full_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub user: AuthUserResponse,
}
