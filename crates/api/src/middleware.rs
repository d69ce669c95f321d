use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use sweetshop_auth::{TokenService, TokenUse};

use crate::app::errors;
use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
}

/// Optional-auth middleware.
///
/// No `Authorization` header means an anonymous request (the read endpoints
/// are public); a present but malformed or invalid bearer token is rejected
/// with 401 before any handler runs.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    if let Some(token) = extract_bearer(req.headers())? {
        let claims = state
            .tokens
            .verify(token, TokenUse::Access, Utc::now())
            .map_err(|_| invalid_token())?;

        req.extensions_mut().insert(PrincipalContext::new(
            claims.sub,
            claims.username,
            claims.role,
        ));
    }

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<Option<&str>, Response> {
    let Some(header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let header = header.to_str().map_err(|_| invalid_token())?;
    let token = header.strip_prefix("Bearer ").ok_or_else(invalid_token)?.trim();
    if token.is_empty() {
        return Err(invalid_token());
    }

    Ok(Some(token))
}

fn invalid_token() -> Response {
    errors::json_error(
        axum::http::StatusCode::UNAUTHORIZED,
        "Token is invalid or expired",
    )
}
