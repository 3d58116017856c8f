//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Repository and tax policy failures have their own types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. zero quantity, missing builder field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated (e.g. adding to a closed reservation).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A conflicting state transition (e.g. closing a closed reservation).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

/// Failure of a repository backend (not a business rule violation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be accessed (e.g. a poisoned lock).
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_build_the_matching_variant() {
        assert_eq!(
            DomainError::validation("quantity must be positive"),
            DomainError::Validation("quantity must be positive".into())
        );
        assert_eq!(
            DomainError::conflict("already closed").to_string(),
            "conflict: already closed"
        );
        assert_eq!(
            DomainError::invariant("reservation is closed").to_string(),
            "invariant violated: reservation is closed"
        );
        assert_eq!(
            DomainError::invalid_id("blank").to_string(),
            "invalid identifier: blank"
        );
    }
}
