//! Error types for the order payments service.

use crate::domain::Currency;

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    #[error("Order is already paid")]
    AlreadyPaid,

    #[error("Cannot pay empty order")]
    EmptyOrder,

    #[error("Cannot modify order after payment")]
    PaidOrderImmutable,
}

/// Repository-level errors (data access failures).
///
/// Lookup misses are infrastructure failures here, not business
/// violations - the application layer decides how to surface them.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Order not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Order not found".into()),
            RepoError::Storage(e) => AppError::Internal(e),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
