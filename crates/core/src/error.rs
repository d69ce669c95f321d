//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("{0}")]
    Validation(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. duplicate username).
    #[error("{0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("Authentication credentials were not provided.")]
    Unauthorized,

    /// The caller is authenticated but lacks the required role.
    #[error("You do not have permission to perform this action.")]
    Forbidden,

    /// A purchase was attempted against an item with zero stock.
    ///
    /// The message is part of the public API contract.
    #[error("This sweet is out of stock.")]
    OutOfStock,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
