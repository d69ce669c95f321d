//! In-memory stores for dev/test.

use std::collections::HashMap;
use std::sync::RwLock;

use sweetshop_auth::{User, UserStore};
use sweetshop_catalog::{CatalogStore, Sweet};
use sweetshop_core::{DomainError, DomainResult, SweetId};

/// In-memory catalog store.
///
/// A single `RwLock` over the whole map makes `update_with` trivially atomic
/// per item: the closure runs under the write lock, and the new value is
/// written back only when the closure succeeds.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<HashMap<SweetId, Sweet>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn get(&self, id: &SweetId) -> Option<Sweet> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn list(&self) -> Vec<Sweet> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        // UUIDv7 ids are time-ordered, so this is creation order.
        let mut sweets: Vec<Sweet> = map.values().cloned().collect();
        sweets.sort_by_key(|s| *s.id.as_uuid());
        sweets
    }

    fn insert(&self, sweet: Sweet) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(sweet.id, sweet);
        }
    }

    fn update_with(
        &self,
        id: &SweetId,
        mutate: &mut dyn FnMut(&mut Sweet) -> DomainResult<()>,
    ) -> DomainResult<Sweet> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("catalog store lock poisoned"))?;

        let current = map.get(id).ok_or(DomainError::NotFound)?;

        // Mutate a copy; the stored value only changes if the closure succeeds.
        let mut updated = current.clone();
        mutate(&mut updated)?;
        map.insert(*id, updated.clone());
        Ok(updated)
    }

    fn remove(&self, id: &SweetId) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("catalog store lock poisoned"))?;
        map.remove(id).map(|_| ()).ok_or(DomainError::NotFound)
    }
}

/// In-memory user store, keyed by username.
///
/// `insert` checks uniqueness and inserts under one write lock, so duplicate
/// registrations cannot race past each other.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: User) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("user store lock poisoned"))?;

        if map.contains_key(&user.username) {
            return Err(DomainError::conflict(
                "A user with that username already exists.",
            ));
        }
        map.insert(user.username.clone(), user);
        Ok(())
    }

    fn get_by_username(&self, username: &str) -> Option<User> {
        let map = self.inner.read().ok()?;
        map.get(username).cloned()
    }
}
