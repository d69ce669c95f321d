use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use sweetshop_auth::{AuthError, AuthzError};
use sweetshop_core::DomainError;

/// Structured error body: `{"error": "<human-readable message>"}`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::Validation(_) | DomainError::OutOfStock => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden => StatusCode::FORBIDDEN,
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
    };

    let message = match &err {
        DomainError::NotFound => "Not found.".to_string(),
        _ => err.to_string(),
    };

    json_error(status, message)
}

pub fn auth_error_to_response(err: &AuthError) -> axum::response::Response {
    match err {
        AuthError::InvalidCredentials | AuthError::InvalidToken => {
            json_error(StatusCode::UNAUTHORIZED, err.to_string())
        }
        AuthError::Internal(msg) => {
            tracing::error!(error = %msg, "internal auth failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
        AuthError::Domain(e) => domain_error_to_response(e.clone()),
    }
}

pub fn authz_error_to_response(err: AuthzError) -> axum::response::Response {
    let status = match err {
        AuthzError::Unauthorized => StatusCode::UNAUTHORIZED,
        AuthzError::Forbidden => StatusCode::FORBIDDEN,
    };
    json_error(status, err.to_string())
}

pub fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "Not found.")
}
