//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (field
/// validation, identifier rules). Storage failures live in `stockbook-infra`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation at construction or copy-with-change time.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (non-positive, out of range, parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Fails with `Validation` when `value` is empty or whitespace only.
    pub fn ensure_not_blank(field: &str, value: &str) -> DomainResult<()> {
        if value.trim().is_empty() {
            return Err(Self::validation(format!("{field} cannot be empty")));
        }
        Ok(())
    }

    /// Fails with `Validation` when `value` is negative.
    pub fn ensure_non_negative(field: &str, value: i64) -> DomainResult<()> {
        if value < 0 {
            return Err(Self::validation(format!(
                "{field} cannot be negative (got {value})"
            )));
        }
        Ok(())
    }
}
