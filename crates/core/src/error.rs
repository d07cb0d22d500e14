//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic input/lookup failures. Persistence
/// concerns belong to the store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input was missing or malformed. The message is shown to the caller.
    #[error("{0}")]
    Validation(String),

    /// A requested item does not exist.
    #[error("item {0} not found")]
    NotFound(ItemId),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_bare_message() {
        let err = DomainError::validation("Amount must be a valid integer.");
        assert_eq!(err.to_string(), "Amount must be a valid integer.");
        assert!(err.is_validation());
        assert!(!DomainError::not_found(ItemId::new(3)).is_validation());
        assert_eq!(DomainError::not_found(ItemId::new(3)).to_string(), "item 3 not found");
    }
}
