//! Catalog store capability.

use std::sync::Arc;

use sweetshop_core::{DomainResult, SweetId};

use crate::Sweet;

/// Persistence capability for the catalog.
///
/// Implementations live in the infra crate. `update_with` is the atomicity
/// contract from the concurrency model: the mutation closure runs as one
/// read-check-write against the stored sweet, and a failing closure must
/// leave the stored value untouched. Two concurrent purchases of a
/// `quantity = 1` sweet therefore cannot both succeed.
pub trait CatalogStore: Send + Sync {
    fn get(&self, id: &SweetId) -> Option<Sweet>;

    fn list(&self) -> Vec<Sweet>;

    fn insert(&self, sweet: Sweet);

    /// Atomically mutate one sweet; returns the updated sweet on success,
    /// `NotFound` for an unknown id, or the closure's error (rolled back).
    fn update_with(
        &self,
        id: &SweetId,
        mutate: &mut dyn FnMut(&mut Sweet) -> DomainResult<()>,
    ) -> DomainResult<Sweet>;

    /// Remove a sweet; `NotFound` for an unknown id.
    fn remove(&self, id: &SweetId) -> DomainResult<()>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn get(&self, id: &SweetId) -> Option<Sweet> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Sweet> {
        (**self).list()
    }

    fn insert(&self, sweet: Sweet) {
        (**self).insert(sweet)
    }

    fn update_with(
        &self,
        id: &SweetId,
        mutate: &mut dyn FnMut(&mut Sweet) -> DomainResult<()>,
    ) -> DomainResult<Sweet> {
        (**self).update_with(id, mutate)
    }

    fn remove(&self, id: &SweetId) -> DomainResult<()> {
        (**self).remove(id)
    }
}
