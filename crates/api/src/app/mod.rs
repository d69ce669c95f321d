//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store + service wiring (and admin seeding)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use sweetshop_auth::TokenService;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(jwt_secret: String) -> Router {
    let tokens = Arc::new(TokenService::new(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState { tokens };

    let services = Arc::new(services::build_services(&jwt_secret));

    // Everything except the health probe runs behind the (optional) auth
    // middleware so a bad token is rejected uniformly.
    let api = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(api)
}
