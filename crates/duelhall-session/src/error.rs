//! Error types for the session layer.

use duelhall_protocol::ClientId;

/// Errors that can occur during session management.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No session exists for the given connection. Either it never
    /// registered or its disconnect was already processed.
    #[error("session not found for {0}")]
    NotFound(ClientId),

    /// A session is already registered under this connection id.
    #[error("{0} already has a session")]
    AlreadyConnected(ClientId),
}
