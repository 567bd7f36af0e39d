//! Session types: one per live connection.

use duelhall_protocol::{ClientId, Role, RoomId, ServerEvent};
use tokio::sync::mpsc;

/// Channel for delivering outbound events to a connection's writer.
///
/// Unbounded so the coordinator never waits on a slow socket; events for
/// one connection arrive in the order they were sent.
pub type EventSender = mpsc::UnboundedSender<ServerEvent>;

/// Where a connection is seated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The room the connection joined.
    pub room_id: RoomId,
    /// Its role, or `None` for a spectator.
    pub role: Option<Role>,
}

/// A live connection's server-side record.
#[derive(Debug)]
pub struct Session {
    /// Which connection this session belongs to.
    pub client: ClientId,

    /// Outbound events go here.
    sender: EventSender,

    /// Current room binding, if the connection has joined a game.
    pub binding: Option<Binding>,
}

impl Session {
    pub(crate) fn new(client: ClientId, sender: EventSender) -> Self {
        Self {
            client,
            sender,
            binding: None,
        }
    }

    /// Queues an event for this connection. Returns `false` if the writer
    /// side is gone (the socket is closing); the event is dropped.
    pub fn send(&self, event: ServerEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}
