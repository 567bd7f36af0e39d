//! Per-connection handler: decode frames into actions, write events back.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! The flow is:
//!   1. Register with the hall under a fresh `ClientId`
//!   2. Loop: forward decoded actions to the hall, and write every queued
//!      event to the socket, whichever is ready first
//!   3. If the hall goes away, close the socket
//!   4. On exit (clean close, error, or panic) the guard queues the
//!      disconnect cleanup
//!
//! The handler never touches room state.

use std::sync::Arc;

use duelhall_protocol::{ClientAction, ClientId, Codec, ProtocolError, ServerEvent};
use duelhall_room::HallHandle;
use duelhall_transport::{Connection, Frame, WebSocketConnection};
use tokio::sync::mpsc;

use crate::DuelhallError;
use crate::server::ServerState;

/// Drop guard that queues the disconnect cleanup when the handler exits.
///
/// `Drop` is synchronous, so the send happens on a spawned task.
struct DisconnectGuard {
    client: ClientId,
    hall: HallHandle,
}

impl Drop for DisconnectGuard {
    fn drop(&mut self) {
        let client = self.client;
        let hall = self.hall.clone();
        tokio::spawn(async move {
            let _ = hall.disconnect(client).await;
        });
    }
}

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection<C: Codec>(
    conn: WebSocketConnection,
    state: Arc<ServerState<C>>,
) -> Result<(), DuelhallError> {
    let client = ClientId(conn.id().into());
    let (tx, mut events) = mpsc::unbounded_channel();

    state.hall.connect(client, tx).await?;
    tracing::debug!(%client, peer = %conn.peer_addr(), "connection registered");
    let _guard = DisconnectGuard {
        client,
        hall: state.hall.clone(),
    };

    loop {
        tokio::select! {
            inbound = conn.recv() => {
                let frame = match inbound {
                    Ok(Some(frame)) => frame,
                    Ok(None) => {
                        tracing::debug!(%client, "connection closed cleanly");
                        break;
                    }
                    Err(e) => {
                        tracing::debug!(%client, error = %e, "recv error");
                        break;
                    }
                };
                let action: ClientAction = match state.codec.decode(frame.as_bytes()) {
                    Ok(action) => action,
                    Err(e) => {
                        tracing::debug!(%client, error = %e, "failed to decode action");
                        continue;
                    }
                };
                if let Err(e) = state.hall.send_action(client, action).await {
                    tracing::warn!(%client, error = %e, "hall unavailable, closing");
                    let _ = conn.close().await;
                    return Err(e.into());
                }
            }
            outbound = events.recv() => {
                let Some(event) = outbound else {
                    // The hall dropped this session (it is shutting down).
                    tracing::debug!(%client, "event stream ended, closing");
                    let _ = conn.close().await;
                    break;
                };
                send_event(&conn, &state.codec, &event).await?;
            }
        }
    }

    // _guard drops here → disconnect cleanup is queued.
    Ok(())
}

/// Encodes one event and writes it as a text or binary frame, following
/// the codec.
async fn send_event<C: Codec>(
    conn: &WebSocketConnection,
    codec: &C,
    event: &ServerEvent,
) -> Result<(), DuelhallError> {
    let bytes = codec.encode(event)?;
    let frame = if C::TEXT {
        String::from_utf8(bytes)
            .map(Frame::Text)
            .map_err(|e| ProtocolError::InvalidMessage(e.to_string()))?
    } else {
        Frame::Binary(bytes)
    };
    conn.send(frame).await?;
    Ok(())
}
