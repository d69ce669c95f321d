//! Auth service: registration, credential verification, token issuance.

use chrono::{DateTime, Utc};
use thiserror::Error;

use sweetshop_core::{DomainError, UserId};

use crate::tokens::TokenError;
use crate::{Claims, NewUser, Role, TokenPair, TokenService, TokenUse, User, UserStore, password};

/// Auth-boundary error.
///
/// The credential/token messages are fixed strings surfaced verbatim to
/// API clients.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No active account found with the given credentials")]
    InvalidCredentials,

    #[error("Token is invalid or expired")]
    InvalidToken,

    /// Hashing/encoding failure; not caller-attributable.
    #[error("internal auth failure: {0}")]
    Internal(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => AuthError::InvalidToken,
            TokenError::Encoding(msg) => AuthError::Internal(msg),
        }
    }
}

/// User creation + credential verification + token issuance over an injected
/// [`UserStore`].
pub struct AuthService<S> {
    users: S,
    tokens: TokenService,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(users: S, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Register a new regular user.
    ///
    /// The password is hashed before the record ever reaches the store;
    /// duplicate usernames fail with `Conflict`.
    pub fn register(&self, input: NewUser) -> Result<User, AuthError> {
        let input = input.validated()?;
        let password_hash =
            password::hash(&input.password).map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: input.username,
            password_hash,
            email: input.email,
            role: Role::Regular,
        };
        self.users.insert(user.clone())?;

        tracing::info!(username = %user.username, "registered user");
        Ok(user)
    }

    /// Verify credentials and issue an access + refresh pair.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, AuthError> {
        let user = self
            .users
            .get_by_username(username)
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.tokens.issue_pair(&user, now)?)
    }

    /// Exchange a refresh token for a new access token.
    pub fn refresh(&self, refresh_token: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        Ok(self.tokens.refresh_access(refresh_token, now)?)
    }

    /// Verify an access token presented on a request.
    pub fn verify_access(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        Ok(self.tokens.verify(token, TokenUse::Access, now)?)
    }

    /// Provision the admin account (role assignment is administrative, not
    /// part of the public API). Idempotent: an existing username is left
    /// untouched.
    pub fn seed_admin(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let input = NewUser {
            username: username.to_string(),
            password: password.to_string(),
            email: None,
        }
        .validated()?;
        let password_hash =
            password::hash(&input.password).map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: input.username,
            password_hash,
            email: None,
            role: Role::Admin,
        };

        match self.users.insert(user) {
            Ok(()) => {
                tracing::info!(username, "seeded admin user");
                Ok(())
            }
            Err(DomainError::Conflict(_)) => {
                tracing::debug!(username, "admin user already present");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
