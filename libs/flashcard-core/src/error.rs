//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised by session operations.
///
/// An empty deck is never an error; operations degrade to a sentinel view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl SessionError {
    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState(reason.into())
    }
}
