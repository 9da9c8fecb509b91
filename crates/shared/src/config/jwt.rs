use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

impl Claims {
    pub fn new(id: i64, role: String, exp: usize, iat: usize, token_type: String) -> Self {
        Claims {
            id,
            role,
            exp,
            iat,
            token_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(
        &self,
        actor_id: i64,
        role: &str,
        token_type: &str,
    ) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = match token_type {
            "access" => (now + Duration::hours(24)).timestamp() as usize,
            "refresh" => (now + Duration::days(7)).timestamp() as usize,
            _ => return Err(ServiceError::InvalidTokenType),
        };

        let claims = Claims::new(actor_id, role.to_string(), exp, iat, token_type.to_string());

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_and_verify_access_token() {
        let jwt = JwtConfig::new("test-secret");

        let token = jwt.generate_token(42, "user", "access").unwrap();
        let claims = jwt.verify_token(&token, "access").unwrap();

        assert_eq!(claims.id, 42);
        assert_eq!(claims.role, "user");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn rejects_wrong_token_type() {
        let jwt = JwtConfig::new("test-secret");

        let token = jwt.generate_token(7, "admin", "refresh").unwrap();
        let err = jwt.verify_token(&token, "access").unwrap_err();

        assert!(matches!(err, ServiceError::InvalidTokenType));
    }

    #[test]
    fn rejects_unknown_token_type_on_generate() {
        let jwt = JwtConfig::new("test-secret");

        let err = jwt.generate_token(7, "user", "session").unwrap_err();

        assert!(matches!(err, ServiceError::InvalidTokenType));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let jwt = JwtConfig::new("test-secret");
        let other = JwtConfig::new("other-secret");

        let token = other.generate_token(7, "user", "access").unwrap();

        assert!(jwt.verify_token(&token, "access").is_err());
    }
}
