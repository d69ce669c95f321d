use axum::Router;

pub mod auth;
pub mod sweets;
pub mod system;

/// Router for all API endpoints.
///
/// Routes are registered with their full literal paths (trailing slashes
/// included) because the path layout is part of the public contract.
pub fn router() -> Router {
    Router::new().merge(auth::router()).merge(sweets::router())
}
