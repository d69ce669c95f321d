//! User record and registration rules.

use serde::{Deserialize, Serialize};

use sweetshop_core::{DomainError, DomainResult, Entity, UserId};

use crate::Role;

/// Usernames longer than this are rejected at registration.
pub const MAX_USERNAME_LENGTH: usize = 150;

/// A registered account.
///
/// # Invariants
/// - `username` is unique across the user store.
/// - `password_hash` is an Argon2 PHC string; the plaintext is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub role: Role,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Registration input (plaintext password, not yet hashed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
}

impl NewUser {
    /// Validate and normalize registration input.
    ///
    /// Hashing happens later, in the service; this only checks shape.
    pub fn validated(self) -> DomainResult<Self> {
        let username = self.username.trim().to_string();
        if username.is_empty() {
            return Err(DomainError::validation("Username may not be blank."));
        }
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(DomainError::validation(
                "Ensure username has no more than 150 characters.",
            ));
        }

        if self.password.is_empty() {
            return Err(DomainError::validation("Password may not be blank."));
        }

        // Basic shape check only; deliverability is not our concern.
        let email = match self.email {
            Some(e) => {
                let e = e.trim().to_string();
                if e.is_empty() {
                    None
                } else if !e.contains('@') {
                    return Err(DomainError::validation("Enter a valid email address."));
                } else {
                    Some(e)
                }
            }
            None => None,
        };

        Ok(Self {
            username,
            password: self.password,
            email,
        })
    }
}
