use axum::http::StatusCode;

/// Liveness probe; deliberately outside the auth middleware.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
