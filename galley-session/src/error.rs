//! Session error types

use galley_client::ClientError;
use thiserror::Error;

/// Session error type
#[derive(Debug, Error)]
pub enum SessionError {
    /// Submission rejected locally; never reaches the network
    #[error("Add items before submitting")]
    EmptyCart,

    /// Collaborator call failed (transport or server)
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SessionError {
    /// Whether this failure was detected locally, before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::EmptyCart)
    }

    /// Human-readable message suitable for a toast-style notification
    pub fn user_message(&self) -> String {
        match self {
            SessionError::EmptyCart => self.to_string(),
            SessionError::Client(e) => e.user_message(),
        }
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
