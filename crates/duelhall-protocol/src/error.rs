//! Wire-format failures.

/// Why a frame could not be produced or understood.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("could not encode event: {0}")]
    Encode(#[source] serde_json::Error),

    /// Not JSON, an unknown `type`, or a payload of the wrong shape.
    #[error("could not decode action: {0}")]
    Decode(#[source] serde_json::Error),

    /// The message parsed but carries a value outside its domain.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
