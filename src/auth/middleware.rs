use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::models::User;
use crate::AppState;

#[derive(Clone)]
pub struct AuthUser {
    pub user: User,
}

#[derive(Clone)]
pub struct AdminUser;

fn extract_token<'a>(request: &'a Request<Body>) -> Option<&'a str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("TOKEN "))
}

/// Resolves the `Authorization: TOKEN <api_key>` header to the owning user
/// and attaches it to the request for handlers to pull out via `Extension`.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_token(&request).ok_or(StatusCode::UNAUTHORIZED)?;

    let user = User::find_by_api_key(&state.pool, token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(AuthUser { user });
    Ok(next.run(request).await)
}

/// Admin routes accept either the configured admin super-token or a user
/// account whose role is `Admin`.
pub async fn admin_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_token(&request).ok_or(StatusCode::UNAUTHORIZED)?;

    if token == state.config.admin_api_token {
        request.extensions_mut().insert(AdminUser);
        return Ok(next.run(request).await);
    }

    let user = User::find_by_api_key(&state.pool, token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if user.role != crate::models::UserRole::Admin {
        return Err(StatusCode::FORBIDDEN);
    }

    request.extensions_mut().insert(AdminUser);
    Ok(next.run(request).await)
}
