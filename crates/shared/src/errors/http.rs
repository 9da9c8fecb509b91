use crate::errors::{
    checkout::CheckoutError, error::ErrorResponse, repository::RepositoryError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                RepositoryError::InsufficientStock(product_id) => {
                    HttpError::Conflict(format!("Insufficient inventory for product {product_id}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token type".into()),
        }
    }
}

impl From<CheckoutError> for HttpError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart => HttpError::BadRequest("Cart is empty".into()),
            CheckoutError::InvalidInput(msg) => HttpError::BadRequest(msg),
            // 409: the caller can fix this by adjusting quantities.
            CheckoutError::InsufficientInventory { product_id } => {
                HttpError::Conflict(format!("Insufficient inventory for product {product_id}"))
            }
            CheckoutError::Repo(_) => HttpError::Internal("Failed to process order".into()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_inventory_maps_to_conflict() {
        let err = HttpError::from(CheckoutError::InsufficientInventory { product_id: 3 });
        assert!(matches!(err, HttpError::Conflict(ref msg) if msg.contains("product 3")));
    }

    #[test]
    fn empty_cart_maps_to_bad_request() {
        let err = HttpError::from(CheckoutError::EmptyCart);
        assert!(matches!(err, HttpError::BadRequest(_)));
    }

    #[test]
    fn persistence_failure_maps_to_internal() {
        let err = HttpError::from(CheckoutError::Repo(RepositoryError::Custom("boom".into())));
        assert!(matches!(err, HttpError::Internal(_)));
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert!(matches!(err, HttpError::NotFound(_)));
    }
}
