//! Tic-tac-toe: alternate marks, three in a row wins.

use duelhall_protocol::{BOARD_CELLS, ClientAction, ClientId, Recipient, Role, ServerEvent};

use super::{Outbound, seated, wrong_game};
use crate::state::TicTacToeState;
use crate::{RoomError, rules};

pub(super) fn apply(
    game: &mut TicTacToeState,
    sender: ClientId,
    role: Option<Role>,
    action: ClientAction,
) -> Result<Outbound, RoomError> {
    match action {
        ClientAction::Move { index } => place(game, seated(sender, role)?, index),
        ClientAction::Restart => {
            seated(sender, role)?;
            game.restart();
            Ok(vec![(Recipient::All, updated(game))])
        }
        other => Err(wrong_game(&other, "tic-tac-toe")),
    }
}

fn place(game: &mut TicTacToeState, role: Role, index: usize) -> Result<Outbound, RoomError> {
    if !game.active {
        return Err(RoomError::IllegalMove("game is not in progress".into()));
    }
    if index >= BOARD_CELLS {
        return Err(RoomError::IllegalMove(format!("cell {index} is off the board")));
    }
    if game.board[index].is_some() {
        return Err(RoomError::IllegalMove(format!("cell {index} is occupied")));
    }
    if role.mark() != Some(game.current) {
        return Err(RoomError::OutOfTurn(role));
    }

    game.board[index] = Some(game.current);

    match rules::check_line_win(&game.board) {
        Some(winner) => {
            game.active = false;
            Ok(vec![(
                Recipient::All,
                ServerEvent::GameOver {
                    winner,
                    state: game.snapshot(),
                },
            )])
        }
        None => {
            game.current = game.current.other();
            Ok(vec![(Recipient::All, updated(game))])
        }
    }
}

fn updated(game: &TicTacToeState) -> ServerEvent {
    ServerEvent::GameStateUpdated {
        state: game.snapshot(),
    }
}
