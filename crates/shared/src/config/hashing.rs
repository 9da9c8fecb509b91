use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{hash, verify};

#[derive(Clone)]
pub struct Hashing;

impl Hashing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, 10).map_err(ServiceError::Bcrypt)?;
        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        verify(password, hashed_password)
            .map_err(ServiceError::Bcrypt)
            .and_then(|is_valid| {
                if is_valid {
                    Ok(())
                } else {
                    Err(ServiceError::InvalidCredentials)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_compare_succeeds() {
        let hashing = Hashing::new();

        let hashed = hashing.hash_password("s3cret").await.unwrap();
        assert!(hashing.compare_password(&hashed, "s3cret").await.is_ok());
    }

    #[tokio::test]
    async fn compare_with_wrong_password_fails() {
        let hashing = Hashing::new();

        let hashed = hashing.hash_password("s3cret").await.unwrap();
        let err = hashing.compare_password(&hashed, "nope").await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
