//! API-side authorization guard for catalog operations.
//!
//! This enforces the permission table at the request boundary (before any
//! service call), while keeping the catalog service auth-agnostic. It runs
//! before id resolution too, so 401/403 take precedence over 404.

use sweetshop_auth::{CatalogAction, authorize};

use crate::app::errors;
use crate::context::PrincipalContext;

/// Check the permission table for the current request.
pub fn authorize_action(
    action: CatalogAction,
    principal: Option<&PrincipalContext>,
) -> Result<(), axum::response::Response> {
    authorize(action, principal.map(|p| p.role())).map_err(errors::authz_error_to_response)
}
