use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::ErrorResponse};
use tracing::warn;

use crate::domain::actor::{Actor, ActorKind};

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            status: "fail".to_string(),
            message: message.to_string(),
        }),
    )
}

/// Resolves the bearer token (header or `token` cookie) into an
/// [`Actor`] and stores it as a request extension. The role comes from
/// the verified claims, never from anything the client sent in a body.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let Some(token) = token else {
        return Err(unauthorized("You are not logged in, please provide token"));
    };

    let claims = jwt
        .verify_token(&token, "access")
        .map_err(|_| unauthorized("Invalid token"))?;

    let Some(kind) = ActorKind::from_role(&claims.role) else {
        warn!("⚠️ Token carries unknown role '{}'", claims.role);
        return Err(unauthorized("Invalid token"));
    };

    req.extensions_mut().insert(Actor {
        id: claims.id as i32,
        kind,
    });

    Ok(next.run(req).await)
}

/// Layered inside `auth_middleware`; rejects everything that is not an
/// employee actor.
pub async fn admin_middleware(
    Extension(actor): Extension<Actor>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    if actor.kind != ActorKind::Employee {
        warn!("⚠️ Actor {} denied access to admin route", actor.id);
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: "Admin access required".to_string(),
            }),
        ));
    }

    Ok(next.run(req).await)
}
