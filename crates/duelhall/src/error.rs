//! Unified error type for the Duelhall server.

use duelhall_protocol::ProtocolError;
use duelhall_room::RoomError;
use duelhall_session::SessionError;
use duelhall_transport::TransportError;

/// Top-level error wrapping every layer's error.
///
/// The `#[from]` conversions let `?` carry a layer error straight up.
/// None of these are sent to clients; a failed connection task just ends.
#[derive(Debug, thiserror::Error)]
pub enum DuelhallError {
    /// Listener or socket failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Encoding or decoding failure.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Unknown or duplicate connection.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The hall rejected a request or has stopped.
    #[error(transparent)]
    Room(#[from] RoomError),
}
