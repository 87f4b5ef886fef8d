//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport, TLS, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or token rejected (401)
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by server-side validation (400 / 422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Operation requires a signed-in session
    #[error("Not signed in")]
    NotAuthenticated,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Text the server sent with the failure, if any
    pub fn server_message(&self) -> Option<&str> {
        let message = match self {
            ClientError::Unauthorized(m)
            | ClientError::Forbidden(m)
            | ClientError::NotFound(m)
            | ClientError::Validation(m)
            | ClientError::Api { message: m, .. } => m.as_str(),
            _ => return None,
        };
        (!message.is_empty()).then_some(message)
    }

    /// Reduce the failure to a single user-facing string
    ///
    /// Prefers the server's message; anything else (transport errors,
    /// undecodable bodies, empty server text) yields `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ClientError::Validation("Booking date must be in the future".into());
        assert_eq!(err.user_message("Operation failed."), "Booking date must be in the future");

        let err = ClientError::Api { status: 500, message: String::new() };
        assert_eq!(err.user_message("Operation failed."), "Operation failed.");

        let err = ClientError::InvalidResponse("missing data".into());
        assert_eq!(err.user_message("Delete failed."), "Delete failed.");
    }
}
