use std::sync::Arc;

use sweetshop_auth::{AuthService, TokenService};
use sweetshop_catalog::CatalogService;
use sweetshop_infra::{InMemoryCatalogStore, InMemoryUserStore};

/// Wired application services shared by all handlers.
pub struct AppServices {
    pub catalog: CatalogService<Arc<InMemoryCatalogStore>>,
    pub auth: AuthService<Arc<InMemoryUserStore>>,
}

/// Build the in-memory service wiring.
///
/// Role assignment is provisioned administratively, not through the API:
/// when `ADMIN_USERNAME`/`ADMIN_PASSWORD` are set in the environment, an
/// admin account is seeded at boot.
pub fn build_services(jwt_secret: &str) -> AppServices {
    let catalog = CatalogService::new(Arc::new(InMemoryCatalogStore::new()));
    let auth = AuthService::new(
        Arc::new(InMemoryUserStore::new()),
        TokenService::new(jwt_secret.as_bytes()),
    );

    match (
        std::env::var("ADMIN_USERNAME"),
        std::env::var("ADMIN_PASSWORD"),
    ) {
        (Ok(username), Ok(password)) => {
            if let Err(e) = auth.seed_admin(&username, &password) {
                tracing::warn!(error = %e, "failed to seed admin user");
            }
        }
        _ => {
            tracing::debug!("no admin credentials in environment; skipping admin seed");
        }
    }

    AppServices { catalog, auth }
}
