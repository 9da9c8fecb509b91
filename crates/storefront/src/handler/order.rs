use crate::{
    abstract_trait::order::DynOrderQueryService,
    domain::{
        actor::Actor,
        response::{api::ApiResponse, order::OrderDetailResponse},
    },
    middleware::auth_middleware,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with items and payment", body = ApiResponse<OrderDetailResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Order belongs to another customer"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&actor, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders/{id}", get(get_order))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
