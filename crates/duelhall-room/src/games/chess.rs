//! Chess: a relay. The server keeps the last reported position token and
//! forwards move descriptors untouched; clients own the rules.

use duelhall_protocol::{ClientAction, ClientId, Recipient, Role, ServerEvent};
use serde_json::Value;

use super::{Outbound, seated, wrong_game};
use crate::RoomError;
use crate::state::ChessState;

pub(super) fn apply(
    game: &mut ChessState,
    sender: ClientId,
    role: Option<Role>,
    action: ClientAction,
) -> Result<Outbound, RoomError> {
    let descriptor = match action {
        ClientAction::ChessMove { descriptor } => descriptor,
        other => return Err(wrong_game(&other, "chess")),
    };
    seated(sender, role)?;

    if let Some(fen) = descriptor.get("fen").and_then(Value::as_str) {
        game.position = fen.to_owned();
    }
    Ok(vec![(
        Recipient::AllExcept(sender),
        ServerEvent::ChessMove { descriptor },
    )])
}
