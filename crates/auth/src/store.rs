//! User store capability.

use std::sync::Arc;

use sweetshop_core::DomainResult;

use crate::User;

/// Storage capability for registered users.
///
/// Implementations live in the infra crate; the service only needs these two
/// operations. `insert` is the uniqueness authority: it must fail with
/// `DomainError::Conflict` when the username is already taken, atomically
/// with the insertion.
pub trait UserStore: Send + Sync {
    fn insert(&self, user: User) -> DomainResult<()>;

    fn get_by_username(&self, username: &str) -> Option<User>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn insert(&self, user: User) -> DomainResult<()> {
        (**self).insert(user)
    }

    fn get_by_username(&self, username: &str) -> Option<User> {
        (**self).get_by_username(username)
    }
}
