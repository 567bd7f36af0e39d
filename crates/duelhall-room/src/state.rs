//! Per-room game state: one variant per game kind.
//!
//! A room's state is created with the room ([`GameState::new`]), begun
//! when the second player sits down, paused when a player leaves, and
//! otherwise only touched by the matching game machine.

use std::collections::{BTreeMap, BTreeSet};

use duelhall_protocol::{BOARD_CELLS, BattlePhase, GameKind, Mark, Role, StateSnapshot};

/// Position token a chess room starts from.
pub const CHESS_START: &str = "start";

/// Tic-tac-toe board and turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeState {
    pub board: [Option<Mark>; BOARD_CELLS],
    pub current: Mark,
    pub active: bool,
}

impl TicTacToeState {
    fn new() -> Self {
        Self {
            board: [None; BOARD_CELLS],
            current: Mark::X,
            active: false,
        }
    }

    /// Empty board, X to move, accepting moves.
    pub(crate) fn restart(&mut self) {
        self.board = [None; BOARD_CELLS];
        self.current = Mark::X;
        self.active = true;
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::TicTacToe {
            board: self.board,
            current_player: self.current,
            active: self.active,
        }
    }
}

/// Chess: only the last position token a client reported. The server never
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessState {
    pub position: String,
    pub active: bool,
}

/// Battleship fleets and shots, keyed by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleshipState {
    pub phase: BattlePhase,
    /// Committed ship cells per role.
    pub ships: BTreeMap<Role, BTreeSet<u8>>,
    /// Cells fired at, keyed by the defending role. Repeats are kept.
    pub attacked: BTreeMap<Role, Vec<u8>>,
    /// Whose shot it is during battle.
    pub turn: Option<Role>,
}

impl BattleshipState {
    fn new() -> Self {
        Self {
            phase: BattlePhase::Placement,
            ships: BTreeMap::new(),
            attacked: BTreeMap::new(),
            turn: None,
        }
    }

    /// Attacks are only accepted during battle.
    pub fn is_active(&self) -> bool {
        self.phase == BattlePhase::Battle
    }

    /// A new pairing sat down. Fleets of roles still seated are kept; a
    /// finished game starts over from scratch.
    fn reseat(&mut self, seated: &[Role]) {
        if self.phase == BattlePhase::Finished {
            *self = Self::new();
            return;
        }
        self.ships.retain(|role, _| seated.contains(role));
        self.attacked.clear();
        self.phase = BattlePhase::Placement;
        self.turn = None;
    }

    /// Public view: who is ready and where shots landed, never the fleets.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::Battleship {
            phase: self.phase,
            turn: self.turn,
            ready: self.ships.keys().copied().collect(),
            attacked: self.attacked.clone(),
            active: self.is_active(),
        }
    }
}

/// The authoritative state of one room's game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    TicTacToe(TicTacToeState),
    Chess(ChessState),
    Battleship(BattleshipState),
}

impl GameState {
    /// Initial state for a freshly created room of `kind`. Inactive until
    /// two players are seated.
    pub fn new(kind: GameKind) -> Self {
        match kind {
            GameKind::TicTacToe => Self::TicTacToe(TicTacToeState::new()),
            GameKind::Chess => Self::Chess(ChessState {
                position: CHESS_START.to_owned(),
                active: false,
            }),
            GameKind::Battleship => Self::Battleship(BattleshipState::new()),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Self::TicTacToe(_) => GameKind::TicTacToe,
            Self::Chess(_) => GameKind::Chess,
            Self::Battleship(_) => GameKind::Battleship,
        }
    }

    /// The active flag.
    pub fn is_active(&self) -> bool {
        match self {
            Self::TicTacToe(game) => game.active,
            Self::Chess(game) => game.active,
            Self::Battleship(game) => game.is_active(),
        }
    }

    /// A new pairing sat down: start a fresh game.
    ///
    /// Battleship goes (back) to placement, keeping any fleet a `seated`
    /// role already committed; it becomes active once both are in.
    pub(crate) fn begin(&mut self, seated: &[Role]) {
        match self {
            Self::TicTacToe(game) => game.restart(),
            Self::Chess(game) => {
                game.position = CHESS_START.to_owned();
                game.active = true;
            }
            Self::Battleship(game) => game.reseat(seated),
        }
    }

    /// The player holding `departed` left: stop accepting moves.
    ///
    /// The tic-tac-toe board is cleared. Battleship forgets the departed
    /// fleet so a replacement in that seat has to commit its own; a
    /// finished battleship game stays finished.
    pub(crate) fn pause(&mut self, departed: Role) {
        match self {
            Self::TicTacToe(game) => {
                game.active = false;
                game.board = [None; BOARD_CELLS];
            }
            Self::Chess(game) => game.active = false,
            Self::Battleship(game) => {
                if game.phase == BattlePhase::Finished {
                    return;
                }
                game.ships.remove(&departed);
                game.phase = BattlePhase::Placement;
                game.turn = None;
            }
        }
    }

    /// The public view broadcast to clients.
    pub fn snapshot(&self) -> StateSnapshot {
        match self {
            Self::TicTacToe(game) => game.snapshot(),
            Self::Chess(game) => StateSnapshot::Chess {
                position: game.position.clone(),
                active: game.active,
            },
            Self::Battleship(game) => game.snapshot(),
        }
    }
}
