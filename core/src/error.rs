//! Error taxonomy shared by the service and every store backend.
//!
//! The HTTP layer is the only place these kinds are turned into status
//! codes; stores and the service just raise them.

use thiserror::Error;

/// Errors raised by [`TodoStore`](crate::store::TodoStore) implementations
/// and the [`TodoService`](crate::service::TodoService) in front of them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required field was missing or empty. Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// No record matches the given id. Maps to 404.
    #[error("Todo not found")]
    NotFound,

    /// The persistence backend failed. Maps to 500.
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Convenience constructor for validation failures.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result alias used across store implementations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_message_verbatim() {
        let err = StoreError::validation("Title is required");
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn not_found_display() {
        assert_eq!(StoreError::NotFound.to_string(), "Todo not found");
    }
}
