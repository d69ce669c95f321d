use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use sweetshop_auth::NewUser;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/auth/register/", post(register))
        .route("/auth/login/", post(login))
        .route("/auth/token/refresh/", post(refresh))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    let req: dto::RegisterRequest = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let input = NewUser {
        username: req.username,
        password: req.password,
        email: req.email,
    };

    match services.auth.register(input) {
        Ok(user) => (StatusCode::CREATED, Json(dto::user_to_json(&user))).into_response(),
        Err(e) => errors::auth_error_to_response(&e),
    }
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    let req: dto::LoginRequest = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    match services.auth.login(&req.username, &req.password, Utc::now()) {
        Ok(pair) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "access": pair.access,
                "refresh": pair.refresh,
            })),
        )
            .into_response(),
        Err(e) => errors::auth_error_to_response(&e),
    }
}

pub async fn refresh(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    let req: dto::RefreshRequest = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    match services.auth.refresh(&req.refresh, Utc::now()) {
        Ok(access) => (
            StatusCode::OK,
            Json(serde_json::json!({ "access": access })),
        )
            .into_response(),
        Err(e) => errors::auth_error_to_response(&e),
    }
}

/// Map body-shape mismatches to a 400 rather than axum's default 422.
pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, axum::response::Response> {
    serde_json::from_value(value)
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, format!("Invalid request body: {e}")))
}
