//! Error types for the room layer.
//!
//! None of these reach the client. The hall logs a rejected action at
//! `debug` and drops it; the absence of a state update is the only signal.

use duelhall_protocol::{ClientId, Role, RoomId};
use duelhall_session::SessionError;

/// Reasons an action or lifecycle operation was not applied.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The room does not exist (usually a disconnect race).
    #[error("room {0} not found")]
    UnknownRoom(RoomId),

    /// The room has no free seat.
    #[error("room {0} is full")]
    RoomFull(RoomId),

    /// The connection is already seated in this room.
    #[error("{0} already in room {1}")]
    AlreadyInRoom(ClientId, RoomId),

    /// The connection has not joined any room.
    #[error("{0} is not in a room")]
    NotInRoom(ClientId),

    /// The connection is spectating and the action needs a role.
    #[error("{0} holds no role")]
    NotSeated(ClientId),

    /// The action does not fit the room's game kind, or its payload is
    /// malformed.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// It is not the acting role's turn.
    #[error("out of turn: {0} cannot act now")]
    OutOfTurn(Role),

    /// The action is well-formed but illegal in the current phase.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A session-layer failure (unknown or duplicate connection).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The hall task has stopped or its queue is closed.
    #[error("hall is unavailable")]
    Unavailable,
}
