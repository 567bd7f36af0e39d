//! Socket-level failures.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The listener could not be opened.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Accepting a TCP connection failed.
    #[error("accept failed: {0}")]
    Accept(#[source] io::Error),

    /// The HTTP → WebSocket upgrade did not complete.
    #[error("websocket upgrade failed: {0}")]
    Upgrade(String),

    #[error("write failed: {0}")]
    Write(String),

    #[error("read failed: {0}")]
    Read(String),
}
