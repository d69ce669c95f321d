//! Catalog permission policy.
//!
//! This enforces authorization at the operation boundary (before the catalog
//! service runs), while keeping the domain service auth-agnostic.

use thiserror::Error;

use crate::Role;

/// A catalog operation, as seen by the permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    List,
    Retrieve,
    Create,
    Update,
    PartialUpdate,
    Delete,
    Purchase,
    Restock,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// No authenticated caller.
    #[error("Authentication credentials were not provided.")]
    Unauthorized,

    /// Authenticated, but the role does not permit the action.
    #[error("You do not have permission to perform this action.")]
    Forbidden,
}

/// Decide whether a caller may perform a catalog action.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy table)
///
/// `create` and `purchase` intentionally allow *any* signed-in user while
/// update/delete/restock require admin; the asymmetry is part of the
/// contract, not an oversight.
pub fn authorize(action: CatalogAction, caller: Option<Role>) -> Result<(), AuthzError> {
    match action {
        CatalogAction::List | CatalogAction::Retrieve => Ok(()),

        CatalogAction::Create | CatalogAction::Purchase => match caller {
            Some(_) => Ok(()),
            None => Err(AuthzError::Unauthorized),
        },

        CatalogAction::Update
        | CatalogAction::PartialUpdate
        | CatalogAction::Delete
        | CatalogAction::Restock => match caller {
            None => Err(AuthzError::Unauthorized),
            Some(Role::Admin) => Ok(()),
            Some(Role::Regular) => Err(AuthzError::Forbidden),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACTIONS: [CatalogAction; 8] = [
        CatalogAction::List,
        CatalogAction::Retrieve,
        CatalogAction::Create,
        CatalogAction::Update,
        CatalogAction::PartialUpdate,
        CatalogAction::Delete,
        CatalogAction::Purchase,
        CatalogAction::Restock,
    ];

    #[test]
    fn reads_are_open_to_everyone() {
        for caller in [None, Some(Role::Regular), Some(Role::Admin)] {
            assert!(authorize(CatalogAction::List, caller).is_ok());
            assert!(authorize(CatalogAction::Retrieve, caller).is_ok());
        }
    }

    #[test]
    fn create_and_purchase_require_any_authenticated_caller() {
        for action in [CatalogAction::Create, CatalogAction::Purchase] {
            assert_eq!(authorize(action, None), Err(AuthzError::Unauthorized));
            assert!(authorize(action, Some(Role::Regular)).is_ok());
            assert!(authorize(action, Some(Role::Admin)).is_ok());
        }
    }

    #[test]
    fn mutations_require_admin() {
        for action in [
            CatalogAction::Update,
            CatalogAction::PartialUpdate,
            CatalogAction::Delete,
            CatalogAction::Restock,
        ] {
            assert_eq!(authorize(action, None), Err(AuthzError::Unauthorized));
            assert_eq!(
                authorize(action, Some(Role::Regular)),
                Err(AuthzError::Forbidden)
            );
            assert!(authorize(action, Some(Role::Admin)).is_ok());
        }
    }

    #[test]
    fn admin_is_allowed_everything() {
        for action in ALL_ACTIONS {
            assert!(authorize(action, Some(Role::Admin)).is_ok());
        }
    }
}
