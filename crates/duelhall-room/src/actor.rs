//! Hall actor: a single Tokio task that owns the [`Hall`].
//!
//! Connection tasks never touch room state. They send commands through a
//! [`HallHandle`]; the actor applies them strictly in arrival order.

use duelhall_protocol::{ClientAction, ClientId, RoomSummary};
use duelhall_session::EventSender;
use tokio::sync::{mpsc, oneshot};

use crate::{Hall, RoomError};

/// Commands sent to the hall actor.
///
/// Variants carrying a `oneshot::Sender` expect a reply; the rest are
/// fire-and-forget.
pub(crate) enum HallCommand {
    /// Register a freshly accepted connection.
    Connect {
        client: ClientId,
        sender: EventSender,
        reply: oneshot::Sender<Result<(), RoomError>>,
    },

    /// A decoded action from a connection.
    Action {
        client: ClientId,
        action: ClientAction,
    },

    /// The connection is gone. Idempotent.
    Disconnect { client: ClientId },

    /// Snapshot of the room listing.
    ListRooms {
        reply: oneshot::Sender<Vec<RoomSummary>>,
    },

    /// Stop the actor.
    Shutdown,
}

/// Handle to the running hall. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HallHandle {
    sender: mpsc::Sender<HallCommand>,
}

impl std::fmt::Debug for HallCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect { client, .. } => write!(f, "Connect({client})"),
            Self::Action { client, action } => write!(f, "Action({client}, {action:?})"),
            Self::Disconnect { client } => write!(f, "Disconnect({client})"),
            Self::ListRooms { .. } => f.write_str("ListRooms"),
            Self::Shutdown => f.write_str("Shutdown"),
        }
    }
}

impl HallHandle {
    /// Registers a connection and waits until the hall has recorded it.
    pub async fn connect(&self, client: ClientId, sender: EventSender) -> Result<(), RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(HallCommand::Connect {
                client,
                sender,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RoomError::Unavailable)?;
        reply_rx.await.map_err(|_| RoomError::Unavailable)?
    }

    /// Queues an action (fire-and-forget). Rejections are logged by the
    /// hall, never reported back.
    pub async fn send_action(&self, client: ClientId, action: ClientAction) -> Result<(), RoomError> {
        self.sender
            .send(HallCommand::Action { client, action })
            .await
            .map_err(|_| RoomError::Unavailable)
    }

    /// Queues disconnect cleanup for `client`.
    pub async fn disconnect(&self, client: ClientId) -> Result<(), RoomError> {
        self.sender
            .send(HallCommand::Disconnect { client })
            .await
            .map_err(|_| RoomError::Unavailable)
    }

    /// The current room listing.
    pub async fn list_rooms(&self) -> Result<Vec<RoomSummary>, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(HallCommand::ListRooms { reply: reply_tx })
            .await
            .map_err(|_| RoomError::Unavailable)?;
        reply_rx.await.map_err(|_| RoomError::Unavailable)
    }

    /// Tells the hall to stop. Commands already queued ahead of it still run.
    pub async fn shutdown(&self) -> Result<(), RoomError> {
        self.sender
            .send(HallCommand::Shutdown)
            .await
            .map_err(|_| RoomError::Unavailable)
    }
}

struct HallActor {
    hall: Hall,
    receiver: mpsc::Receiver<HallCommand>,
}

impl HallActor {
    async fn run(mut self) {
        tracing::info!("hall started");

        while let Some(cmd) = self.receiver.recv().await {
            tracing::trace!(?cmd, "hall command");
            match cmd {
                HallCommand::Connect {
                    client,
                    sender,
                    reply,
                } => {
                    let _ = reply.send(self.hall.connect(client, sender));
                }
                HallCommand::Action { client, action } => {
                    self.hall.handle(client, action);
                }
                HallCommand::Disconnect { client } => {
                    self.hall.disconnect(client);
                }
                HallCommand::ListRooms { reply } => {
                    let _ = reply.send(self.hall.list_rooms());
                }
                HallCommand::Shutdown => {
                    tracing::info!("hall shutting down");
                    break;
                }
            }
        }

        tracing::info!(rooms = self.hall.rooms().len(), "hall stopped");
    }
}

/// Spawns the hall actor and returns a handle to it.
///
/// `channel_size` bounds the command queue; senders wait when it is full.
pub fn spawn_hall(channel_size: usize) -> HallHandle {
    let (tx, rx) = mpsc::channel(channel_size);
    let actor = HallActor {
        hall: Hall::new(),
        receiver: rx,
    };
    tokio::spawn(actor.run());
    HallHandle { sender: tx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duelhall_protocol::{GameKind, Role, ServerEvent};

    #[tokio::test]
    async fn test_connect_then_duplicate_is_rejected() {
        let hall = spawn_hall(8);
        let (tx, _rx) = mpsc::unbounded_channel();
        hall.connect(ClientId(1), tx.clone()).await.unwrap();
        let err = hall.connect(ClientId(1), tx).await.unwrap_err();
        assert!(matches!(err, RoomError::Session(_)));
    }

    #[tokio::test]
    async fn test_actions_are_applied_in_order() {
        let hall = spawn_hall(8);
        let (tx, mut rx) = mpsc::unbounded_channel();
        hall.connect(ClientId(1), tx).await.unwrap();
        hall.send_action(
            ClientId(1),
            ClientAction::Join {
                kind: GameKind::TicTacToe,
                room_id: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(
            rx.recv().await.unwrap(),
            ServerEvent::RoleAssigned { role: Some(Role::X) }
        );
        assert!(matches!(rx.recv().await.unwrap(), ServerEvent::RoomJoined { .. }));
        assert_eq!(hall.list_rooms().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_handle_fails_after_shutdown() {
        let hall = spawn_hall(8);
        hall.shutdown().await.unwrap();
        // The actor drops its receiver once the loop exits.
        tokio::task::yield_now().await;
        let result = hall.list_rooms().await;
        assert!(matches!(result, Err(RoomError::Unavailable)));
    }
}
