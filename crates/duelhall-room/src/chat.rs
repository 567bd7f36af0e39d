//! Room chat. Players and spectators alike; no filtering, no history.

use duelhall_protocol::{ClientId, Recipient, Role, Seat, ServerEvent};

/// Builds the broadcast for one chat line, labelled with the sender's seat.
pub(crate) fn relay(sender: ClientId, role: Option<Role>, text: String) -> (Recipient, ServerEvent) {
    (
        Recipient::All,
        ServerEvent::ChatMessage {
            id: sender,
            role: Seat::from(role),
            text,
        },
    )
}
