//! Game machines: one module per kind, selected by the room's state
//! variant.
//!
//! Each machine takes the acting connection's seat and an action, mutates
//! its own state, and returns the events to fan out. A rejected action
//! returns an error and leaves the state untouched.

mod battleship;
mod chess;
mod tictactoe;

use duelhall_protocol::{ClientAction, ClientId, Recipient, Role, ServerEvent};

use crate::{GameState, Room, RoomError, chat};

/// Events to deliver, in order, each with its audience.
pub type Outbound = Vec<(Recipient, ServerEvent)>;

/// Routes an in-room action to the room's machine (or the chat relay).
pub(crate) fn dispatch(
    room: &mut Room,
    sender: ClientId,
    action: ClientAction,
) -> Result<Outbound, RoomError> {
    let role = room.role_of(sender);
    if let ClientAction::ChatMessage { text } = action {
        return Ok(vec![chat::relay(sender, role, text)]);
    }
    let seated = room.held_roles();
    match room.state_mut() {
        GameState::TicTacToe(game) => tictactoe::apply(game, sender, role, action),
        GameState::Chess(game) => chess::apply(game, sender, role, action),
        GameState::Battleship(game) => battleship::apply(game, sender, role, &seated, action),
    }
}

/// A new pairing sat down: restarts the room's game and returns anything
/// that follows immediately from state carried over (a battleship room
/// whose remaining player had already committed a fleet).
pub(crate) fn begin(room: &mut Room) -> Outbound {
    let seated = room.held_roles();
    let state = room.state_mut();
    state.begin(&seated);
    match state {
        GameState::Battleship(game) => battleship::begin(game, &seated),
        GameState::TicTacToe(_) | GameState::Chess(_) => Outbound::new(),
    }
}

/// The acting connection's role, or `NotSeated` for spectators.
fn seated(sender: ClientId, role: Option<Role>) -> Result<Role, RoomError> {
    role.ok_or(RoomError::NotSeated(sender))
}

fn wrong_game(action: &ClientAction, game: &str) -> RoomError {
    RoomError::InvalidAction(format!("{action:?} is not a {game} action"))
}
