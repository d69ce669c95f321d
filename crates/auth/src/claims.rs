use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sweetshop_core::UserId;

use crate::Role;

/// Whether a token authenticates requests or only mints new access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenUse {
    Access,
    Refresh,
}

/// JWT claims model (transport-agnostic).
///
/// This is the minimal set of claims the API expects once a token has been
/// decoded/verified. `iat`/`exp` are serialized as unix-second timestamps so
/// they are ordinary numeric JWT claims on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject / user identifier.
    pub sub: UserId,

    /// Username at issuance time.
    pub username: String,

    /// Role granted to the subject.
    pub role: Role,

    /// Access vs refresh token.
    #[serde(rename = "token_type")]
    pub token_use: TokenUse,

    /// Issued-at timestamp.
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate claims against a clock reading.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// lives in [`crate::tokens`].
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
