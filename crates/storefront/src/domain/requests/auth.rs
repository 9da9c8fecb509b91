use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,

    pub gender: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    pub address: Option<String>,
}

/// Customer row payload after the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateCustomerRecordRequest {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn register_requires_valid_email_and_password_length() {
        let req = RegisterRequest {
            full_name: "Jane Doe".into(),
            email: "not-an-email".into(),
            password: "short".into(),
            gender: None,
            phone: None,
            address: None,
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn valid_register_passes() {
        let req = RegisterRequest {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "longenough".into(),
            gender: Some("Female".into()),
            phone: Some("123456".into()),
            address: Some("1 Main St".into()),
        };

        assert!(req.validate().is_ok());
    }
}
