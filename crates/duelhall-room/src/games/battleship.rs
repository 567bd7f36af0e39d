//! Battleship: both fleets are committed in placement, then the players
//! alternate shots until one fleet is fully hit.

use std::collections::BTreeSet;

use duelhall_protocol::{
    BattlePhase, ClientAction, ClientId, GRID_CELLS, GameKind, Recipient, Role, ServerEvent, Winner,
};

use super::{Outbound, seated, wrong_game};
use crate::state::BattleshipState;
use crate::{ROOM_CAPACITY, RoomError, roles, rules};

pub(super) fn apply(
    game: &mut BattleshipState,
    sender: ClientId,
    role: Option<Role>,
    seated_roles: &[Role],
    action: ClientAction,
) -> Result<Outbound, RoomError> {
    match action {
        ClientAction::BattleshipReady { cells } => {
            ready(game, seated(sender, role)?, seated_roles, cells)
        }
        ClientAction::BattleshipAttack { index } => {
            attack(game, seated(sender, role)?, seated_roles, index)
        }
        other => Err(wrong_game(&other, "battleship")),
    }
}

fn ready(
    game: &mut BattleshipState,
    role: Role,
    seated_roles: &[Role],
    cells: Vec<u8>,
) -> Result<Outbound, RoomError> {
    if game.phase == BattlePhase::Battle {
        return Err(RoomError::IllegalMove("fleets are locked during battle".into()));
    }
    if cells.is_empty() {
        return Err(RoomError::InvalidAction("no ship cells".into()));
    }
    if let Some(cell) = cells.iter().find(|cell| **cell >= GRID_CELLS) {
        return Err(RoomError::InvalidAction(format!("cell {cell} is off the grid")));
    }

    if game.phase == BattlePhase::Finished {
        game.phase = BattlePhase::Placement;
        game.ships.clear();
        game.attacked.clear();
        game.turn = None;
    }
    game.ships.insert(role, cells.into_iter().collect::<BTreeSet<u8>>());

    let mut out = Outbound::new();
    if let Some(start) = try_start(game, seated_roles) {
        out.push((Recipient::All, start));
    }
    out.push((Recipient::All, updated(game)));
    Ok(out)
}

/// A new pairing sat down. Starts the battle at once if both seated roles
/// already committed their fleets.
pub(super) fn begin(game: &mut BattleshipState, seated_roles: &[Role]) -> Outbound {
    try_start(game, seated_roles)
        .map(|start| vec![(Recipient::All, start)])
        .unwrap_or_default()
}

/// Moves placement into battle once every seat holds a fleet. Returns the
/// `battle_start` event when it does.
fn try_start(game: &mut BattleshipState, seated_roles: &[Role]) -> Option<ServerEvent> {
    let everyone_ready = game.phase == BattlePhase::Placement
        && seated_roles.len() == ROOM_CAPACITY
        && seated_roles.iter().all(|held| game.ships.contains_key(held));
    if !everyone_ready {
        return None;
    }

    let [first, _] = GameKind::Battleship.roles();
    game.phase = BattlePhase::Battle;
    game.attacked.clear();
    game.turn = Some(first);
    tracing::debug!(turn = %first, "battle started");
    Some(ServerEvent::BattleStart { turn: first })
}

fn attack(
    game: &mut BattleshipState,
    role: Role,
    seated_roles: &[Role],
    index: u8,
) -> Result<Outbound, RoomError> {
    if game.phase != BattlePhase::Battle {
        return Err(RoomError::IllegalMove("no battle in progress".into()));
    }
    if game.turn != Some(role) {
        return Err(RoomError::OutOfTurn(role));
    }
    if index >= GRID_CELLS {
        return Err(RoomError::InvalidAction(format!("cell {index} is off the grid")));
    }
    let defender = roles::opponent(role);
    if !seated_roles.contains(&defender) {
        return Err(RoomError::IllegalMove(format!("{defender} is not seated")));
    }
    let Some(fleet) = game.ships.get(&defender) else {
        return Err(RoomError::IllegalMove(format!("{defender} has no fleet")));
    };

    let hit = fleet.contains(&index);
    let shots = game.attacked.entry(defender).or_default();
    shots.push(index);
    let sunk = rules::all_sunk(fleet, shots);

    let mut out = vec![(
        Recipient::All,
        ServerEvent::AttackResult {
            shooter: role,
            index,
            hit,
        },
    )];
    if sunk {
        game.phase = BattlePhase::Finished;
        game.turn = None;
        out.push((
            Recipient::All,
            ServerEvent::GameOver {
                winner: Winner::Role(role),
                state: game.snapshot(),
            },
        ));
    } else {
        game.turn = Some(defender);
        out.push((Recipient::All, ServerEvent::TurnUpdated { turn: defender }));
    }
    Ok(out)
}

fn updated(game: &BattleshipState) -> ServerEvent {
    ServerEvent::GameStateUpdated {
        state: game.snapshot(),
    }
}
