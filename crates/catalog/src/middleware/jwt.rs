use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::HttpError};
use tracing::warn;

/// Accepts a `token` cookie or an `Authorization: Bearer` header and stores
/// the authenticated user id as a request extension.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
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
        return Err(HttpError::Unauthorized(
            "You are not logged in, please provide token".to_string(),
        ));
    };

    let user_id = jwt.verify_token(&token, "access").map_err(|e| {
        warn!("🔒 Rejected token on {}: {e}", req.uri().path());
        HttpError::Unauthorized("Invalid token".to_string())
    })?;

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
