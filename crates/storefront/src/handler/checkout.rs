use crate::{
    abstract_trait::checkout::DynCheckoutService,
    domain::{
        actor::Actor, requests::checkout::CheckoutRequest, response::checkout::CheckoutResponse,
    },
    middleware::{SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, middleware, response::IntoResponse, routing::post,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/checkout",
    tag = "Checkout",
    security(("bearer_auth" = [])),
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed", body = CheckoutResponse),
        (status = 400, description = "Empty cart or invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Insufficient inventory"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn checkout_handler(
    Extension(service): Extension<DynCheckoutService>,
    Extension(actor): Extension<Actor>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.place_order(&actor, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn checkout_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/checkout", post(checkout_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.checkout_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
