//! Error types for the remote service.

use thiserror::Error;

/// Errors surfaced by [`RemoteService`](super::RemoteService) implementations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RemoteError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Server responded with status {code}")]
    Status { code: u16 },

    /// The response body could not be understood.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Server-reported failures, as opposed to transport failures.
    pub fn is_unsuccessful_response(&self) -> bool {
        matches!(self, RemoteError::Status { .. })
    }
}
