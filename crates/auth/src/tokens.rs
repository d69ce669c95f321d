//! HS256 token issuance and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::{Claims, TokenUse, User, validate_claims};

/// Access + refresh token pair returned by login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, malformed token, wrong token type, or expired.
    #[error("Token is invalid or expired")]
    Invalid,

    /// Encoding failed (should not happen with an HS256 secret key).
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

/// Stateless HS256 token codec.
///
/// Signature verification happens here; the expiry window is checked by the
/// pure [`validate_claims`] against the caller-supplied clock reading, so
/// lifetime behavior is testable deterministically.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenService {
    /// Default lifetimes: access 15 minutes, refresh 1 day.
    pub fn new(secret: &[u8]) -> Self {
        Self::with_lifetimes(secret, Duration::minutes(15), Duration::days(1))
    }

    pub fn with_lifetimes(
        secret: &[u8],
        access_lifetime: Duration,
        refresh_lifetime: Duration,
    ) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            access_lifetime,
            refresh_lifetime,
        }
    }

    /// Issue an access + refresh pair for an authenticated user.
    pub fn issue_pair(&self, user: &User, now: DateTime<Utc>) -> Result<TokenPair, TokenError> {
        let access = self.encode(&self.claims_for(user, TokenUse::Access, now))?;
        let refresh = self.encode(&self.claims_for(user, TokenUse::Refresh, now))?;
        Ok(TokenPair { access, refresh })
    }

    /// Exchange a valid refresh token for a fresh access token.
    ///
    /// Identity claims are carried over from the refresh token; only the
    /// type and time window change.
    pub fn refresh_access(
        &self,
        refresh_token: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = self.verify(refresh_token, TokenUse::Refresh, now)?;
        self.encode(&Claims {
            token_use: TokenUse::Access,
            issued_at: now,
            expires_at: now + self.access_lifetime,
            ..claims
        })
    }

    /// Verify signature, time window, and token type.
    pub fn verify(
        &self,
        token: &str,
        expected_use: TokenUse,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below via validate_claims, against `now`.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;
        let claims = data.claims;

        validate_claims(&claims, now).map_err(|_| TokenError::Invalid)?;
        if claims.token_use != expected_use {
            return Err(TokenError::Invalid);
        }

        Ok(claims)
    }

    fn claims_for(&self, user: &User, token_use: TokenUse, now: DateTime<Utc>) -> Claims {
        let lifetime = match token_use {
            TokenUse::Access => self.access_lifetime,
            TokenUse::Refresh => self.refresh_lifetime,
        };
        Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            token_use,
            issued_at: now,
            expires_at: now + lifetime,
        }
    }

    fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use sweetshop_core::UserId;

    fn user(role: Role) -> User {
        User {
            id: UserId::new(),
            username: "alice".to_string(),
            password_hash: "$argon2id$test".to_string(),
            email: None,
            role,
        }
    }

    fn service() -> TokenService {
        TokenService::new(b"test-secret")
    }

    #[test]
    fn issued_access_token_verifies() {
        let svc = service();
        let user = user(Role::Admin);
        let now = Utc::now();

        let pair = svc.issue_pair(&user, now).unwrap();
        let claims = svc.verify(&pair.access, TokenUse::Access, now).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn refresh_token_does_not_authenticate_as_access() {
        let svc = service();
        let now = Utc::now();
        let pair = svc.issue_pair(&user(Role::Regular), now).unwrap();

        assert_eq!(
            svc.verify(&pair.refresh, TokenUse::Access, now),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn expired_access_token_rejected() {
        let svc = service();
        let now = Utc::now();
        let pair = svc.issue_pair(&user(Role::Regular), now).unwrap();

        let later = now + Duration::minutes(16);
        assert_eq!(
            svc.verify(&pair.access, TokenUse::Access, later),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn foreign_signature_rejected() {
        let now = Utc::now();
        let pair = TokenService::new(b"other-secret")
            .issue_pair(&user(Role::Regular), now)
            .unwrap();

        assert_eq!(
            service().verify(&pair.access, TokenUse::Access, now),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn refresh_mints_a_working_access_token() {
        let svc = service();
        let user = user(Role::Regular);
        let now = Utc::now();
        let pair = svc.issue_pair(&user, now).unwrap();

        // The refresh token outlives the original access token.
        let later = now + Duration::hours(1);
        let access = svc.refresh_access(&pair.refresh, later).unwrap();
        let claims = svc.verify(&access, TokenUse::Access, later).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.issued_at.timestamp(), later.timestamp());
    }

    #[test]
    fn access_token_cannot_be_used_to_refresh() {
        let svc = service();
        let now = Utc::now();
        let pair = svc.issue_pair(&user(Role::Regular), now).unwrap();

        assert_eq!(
            svc.refresh_access(&pair.access, now),
            Err(TokenError::Invalid)
        );
    }
}
