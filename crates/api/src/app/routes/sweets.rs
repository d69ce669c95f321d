use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use sweetshop_auth::CatalogAction;
use sweetshop_core::SweetId;

use crate::app::routes::auth::parse_body;
use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/sweets/", get(list_sweets).post(create_sweet))
        .route(
            "/sweets/:id/",
            get(get_sweet)
                .put(update_sweet)
                .patch(patch_sweet)
                .delete(delete_sweet),
        )
        .route("/sweets/:id/purchase/", post(purchase_sweet))
        .route("/sweets/:id/restock/", post(restock_sweet))
}

pub async fn list_sweets(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let sweets = services.catalog.list();
    let body: Vec<serde_json::Value> = sweets.iter().map(dto::sweet_to_json).collect();
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn create_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    principal: Option<Extension<PrincipalContext>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    if let Err(resp) = authz::authorize_action(CatalogAction::Create, principal.as_ref().map(|Extension(p)| p)) {
        return resp;
    }

    let req: dto::SweetRequest = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    let input = match dto::to_new_sweet(req) {
        Ok(input) => input,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.create(input) {
        Ok(sweet) => (StatusCode::CREATED, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Ok(id) = id.parse::<SweetId>() else {
        return errors::not_found();
    };

    match services.catalog.get(&id) {
        Ok(sweet) => (StatusCode::OK, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    principal: Option<Extension<PrincipalContext>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    if let Err(resp) = authz::authorize_action(CatalogAction::Update, principal.as_ref().map(|Extension(p)| p)) {
        return resp;
    }
    let Ok(id) = id.parse::<SweetId>() else {
        return errors::not_found();
    };

    let req: dto::SweetRequest = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    let input = match dto::to_new_sweet(req) {
        Ok(input) => input,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.update(&id, input) {
        Ok(sweet) => (StatusCode::OK, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn patch_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    principal: Option<Extension<PrincipalContext>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    if let Err(resp) = authz::authorize_action(CatalogAction::PartialUpdate, principal.as_ref().map(|Extension(p)| p)) {
        return resp;
    }
    let Ok(id) = id.parse::<SweetId>() else {
        return errors::not_found();
    };

    let req: dto::SweetPatchRequest = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    let patch = match dto::to_sweet_patch(req) {
        Ok(patch) => patch,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.partial_update(&id, patch) {
        Ok(sweet) => (StatusCode::OK, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    principal: Option<Extension<PrincipalContext>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = authz::authorize_action(CatalogAction::Delete, principal.as_ref().map(|Extension(p)| p)) {
        return resp;
    }
    let Ok(id) = id.parse::<SweetId>() else {
        return errors::not_found();
    };

    match services.catalog.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn purchase_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    principal: Option<Extension<PrincipalContext>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = authz::authorize_action(CatalogAction::Purchase, principal.as_ref().map(|Extension(p)| p)) {
        return resp;
    }
    let Ok(id) = id.parse::<SweetId>() else {
        return errors::not_found();
    };

    match services.catalog.purchase(&id) {
        Ok(sweet) => (StatusCode::OK, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn restock_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    principal: Option<Extension<PrincipalContext>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    if let Err(resp) = authz::authorize_action(CatalogAction::Restock, principal.as_ref().map(|Extension(p)| p)) {
        return resp;
    }
    let Ok(id) = id.parse::<SweetId>() else {
        return errors::not_found();
    };

    let req: dto::RestockRequest = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    let amount = match dto::parse_restock_amount(&req.quantity) {
        Ok(amount) => amount,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.restock(&id, amount) {
        Ok(sweet) => (StatusCode::OK, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
