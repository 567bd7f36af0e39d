//! Inbound actions, outbound events, and the public game snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{BOARD_CELLS, ClientId, GameKind, Mark, Role, RoomId, Seat, Winner};

// ---------------------------------------------------------------------------
// ClientAction — client → server
// ---------------------------------------------------------------------------

/// Everything a client may ask the server to do.
///
/// Whether an action is legal depends on the room it lands in; the room
/// layer drops anything that does not fit its game kind or phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientAction {
    /// Join a room of `kind`. With `room_id`, join that room specifically
    /// (as a spectator if it is full); without, take the first room with a
    /// free seat or open a new one.
    Join {
        kind: GameKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        room_id: Option<RoomId>,
    },

    /// Tic-tac-toe: place the sender's mark at `index` (0–8).
    Move { index: usize },

    /// Tic-tac-toe: clear the board and start over with X.
    Restart,

    /// Chess: relay an opaque move descriptor to the opponent.
    ChessMove {
        #[serde(rename = "move")]
        descriptor: serde_json::Value,
    },

    /// Battleship: commit the sender's ship cells (indices 0–99).
    BattleshipReady { cells: Vec<u8> },

    /// Battleship: fire at `index` (0–99) on the opponent's grid.
    BattleshipAttack { index: u8 },

    /// Say something to everyone in the room.
    ChatMessage { text: String },

    /// Ask for the list of open rooms.
    ListRooms,
}

// ---------------------------------------------------------------------------
// StateSnapshot — the public view of a game
// ---------------------------------------------------------------------------

/// Battleship progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattlePhase {
    /// Players are choosing ship cells.
    Placement,
    /// Turn-based attacks.
    Battle,
    /// Someone's fleet is sunk.
    Finished,
}

/// What clients are allowed to see of a room's game state.
///
/// Battleship snapshots never include ship positions, only which roles have
/// committed and which cells have been fired at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StateSnapshot {
    #[serde(rename = "tictactoe")]
    TicTacToe {
        board: [Option<Mark>; BOARD_CELLS],
        current_player: Mark,
        active: bool,
    },
    #[serde(rename = "chess")]
    Chess { position: String, active: bool },
    #[serde(rename = "battleship")]
    Battleship {
        phase: BattlePhase,
        turn: Option<Role>,
        ready: Vec<Role>,
        /// Cells fired at, keyed by the role that was defending.
        attacked: BTreeMap<Role, Vec<u8>>,
        active: bool,
    },
}

impl StateSnapshot {
    /// The active flag: whether moves or attacks are currently accepted.
    pub fn is_active(&self) -> bool {
        match self {
            Self::TicTacToe { active, .. }
            | Self::Chess { active, .. }
            | Self::Battleship { active, .. } => *active,
        }
    }
}

/// One line of a room listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub room_id: RoomId,
    pub kind: GameKind,
    /// Seats currently taken.
    pub players: usize,
    /// Seats in total.
    pub capacity: usize,
}

// ---------------------------------------------------------------------------
// ServerEvent — server → client
// ---------------------------------------------------------------------------

/// Everything the server tells clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Sent to a joiner: its seat. `None` means spectator.
    RoleAssigned { role: Option<Role> },

    /// Sent to a joiner: the room it landed in.
    RoomJoined { room_id: RoomId },

    /// Broadcast when the second player takes a seat.
    GameStart { players: Vec<Role> },

    /// Broadcast whenever the visible game state changes.
    GameStateUpdated { state: StateSnapshot },

    /// Broadcast when a game reaches a terminal state.
    GameOver { winner: Winner, state: StateSnapshot },

    /// Battleship: both fleets committed; `turn` fires first.
    BattleStart { turn: Role },

    /// Battleship: the turn passed to `turn`.
    TurnUpdated { turn: Role },

    /// Battleship: outcome of one shot.
    AttackResult { shooter: Role, index: u8, hit: bool },

    /// Chess: the opponent's move, relayed verbatim.
    ChessMove {
        #[serde(rename = "move")]
        descriptor: serde_json::Value,
    },

    /// A player left the room; the game is paused.
    PlayerLeft,

    /// A chat line from connection `id`.
    ChatMessage { id: ClientId, role: Seat, text: String },

    /// Reply to `list_rooms`.
    RoomList { rooms: Vec<RoomSummary> },
}
