//! Catalog service: CRUD + purchase/restock over an injected store.

use sweetshop_core::{DomainError, DomainResult, SweetId};

use crate::{CatalogStore, NewSweet, Sweet, SweetPatch};

/// The item service.
///
/// Every operation is a short, synchronous read-modify-write; mutations of an
/// existing sweet go through [`CatalogStore::update_with`] so the
/// read-check-write is atomic per item. Callers are responsible for
/// authorization (see `sweetshop-auth::policy`).
pub struct CatalogService<S> {
    store: S,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All catalog items. No side effects.
    pub fn list(&self) -> Vec<Sweet> {
        self.store.list()
    }

    /// One item by id.
    pub fn get(&self, id: &SweetId) -> DomainResult<Sweet> {
        self.store.get(id).ok_or(DomainError::NotFound)
    }

    /// Validate, assign a fresh id, persist.
    pub fn create(&self, input: NewSweet) -> DomainResult<Sweet> {
        let sweet = Sweet::create(SweetId::new(), input)?;
        self.store.insert(sweet.clone());
        tracing::info!(id = %sweet.id, name = %sweet.name, "sweet created");
        Ok(sweet)
    }

    /// Full replace of an existing item.
    pub fn update(&self, id: &SweetId, input: NewSweet) -> DomainResult<Sweet> {
        let sweet = self
            .store
            .update_with(id, &mut |sweet| sweet.apply_update(input.clone()))?;
        tracing::info!(id = %sweet.id, "sweet updated");
        Ok(sweet)
    }

    /// Merge the provided fields into an existing item.
    pub fn partial_update(&self, id: &SweetId, patch: SweetPatch) -> DomainResult<Sweet> {
        let sweet = self
            .store
            .update_with(id, &mut |sweet| sweet.apply_patch(patch.clone()))?;
        tracing::info!(id = %sweet.id, "sweet partially updated");
        Ok(sweet)
    }

    /// Remove an item.
    pub fn delete(&self, id: &SweetId) -> DomainResult<()> {
        self.store.remove(id)?;
        tracing::info!(%id, "sweet deleted");
        Ok(())
    }

    /// Decrement stock by one unit; fails with `OutOfStock` at zero.
    pub fn purchase(&self, id: &SweetId) -> DomainResult<Sweet> {
        let sweet = self.store.update_with(id, &mut |sweet| sweet.purchase())?;
        tracing::info!(id = %sweet.id, quantity = sweet.quantity, "sweet purchased");
        Ok(sweet)
    }

    /// Increment stock by a positive, already-parsed amount.
    pub fn restock(&self, id: &SweetId, amount: i64) -> DomainResult<Sweet> {
        let sweet = self
            .store
            .update_with(id, &mut |sweet| sweet.restock(amount))?;
        tracing::info!(id = %sweet.id, amount, quantity = sweet.quantity, "sweet restocked");
        Ok(sweet)
    }
}
