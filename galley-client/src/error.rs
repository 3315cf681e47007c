//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure; no response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response received with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Human-readable message suitable for a toast-style notification
    ///
    /// Server-provided text is surfaced verbatim; transport and decode
    /// failures map to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Http(_) | ClientError::InvalidResponse(_) => {
                "Unable to reach the server".to_string()
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
