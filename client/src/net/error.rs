//! Error type for REST calls.

use crate::util::storage::StorageError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// HTTP is not available in this build (SSR, native tests).
    #[error("not available on server")]
    Unavailable,

    /// The backend answered 401; the session was cleared.
    #[error("session expired")]
    SessionExpired,

    /// The call needs a session but none is stored.
    #[error("not signed in")]
    NotSignedIn,

    /// Any other non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// Token verification after sign-in was rejected or incomplete.
    #[error("token verification failed: {0}")]
    Verification(String),

    /// The session could not be written to storage.
    #[error("session could not be saved: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Server-provided message for status errors, else the display text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}
