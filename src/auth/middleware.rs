//! Auth Middleware
//!
//! Axum middleware that gates the catalog routes behind a bearer token.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::error::{ApiError, Result};
use crate::models::AuthenticatedUser;

/// Extracts the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    header_value.and_then(|value| value.strip_prefix("Bearer "))
}

/// Middleware requiring a valid bearer token on the wrapped routes.
///
/// Missing, malformed, invalid, or expired tokens all produce a 401 before
/// the handler runs. On success the authenticated user is attached to the
/// request extensions for handlers that want it.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let token = bearer_token(header_value)
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    let claims = state.auth.verify_token(token)?;

    request.extensions_mut().insert(AuthenticatedUser {
        username: claims.sub,
    });

    Ok(next.run(request).await)
}
