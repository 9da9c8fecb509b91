use crate::errors::repository::RepositoryError;
use thiserror::Error;

/// Failure classes of order placement. Everything here rolls the whole
/// transaction back; nothing is partially committed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient inventory for product {product_id}")]
    InsufficientInventory { product_id: i32 },

    #[error("Repository error: {0}")]
    Repo(RepositoryError),
}

impl From<RepositoryError> for CheckoutError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InsufficientStock(product_id) => {
                CheckoutError::InsufficientInventory { product_id }
            }
            other => CheckoutError::Repo(other),
        }
    }
}
