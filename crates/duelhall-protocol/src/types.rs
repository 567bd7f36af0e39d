//! Identity types shared by every layer: who is connected, which room,
//! which game, and which seat at the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Number of cells on a tic-tac-toe board.
pub const BOARD_CELLS: usize = 9;

/// Number of cells on a battleship grid (10×10).
pub const GRID_CELLS: u8 = 100;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// Identity of one anonymous connection.
///
/// Used only for lookup; holding a `ClientId` never implies owning the room
/// it is bound to. Serializes as a plain number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClientId(pub u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C-{}", self.0)
    }
}

/// Identifier of a room, e.g. `chess_1718000000000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// GameKind
// ---------------------------------------------------------------------------

/// The closed set of games a room can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    #[serde(rename = "tictactoe")]
    TicTacToe,
    #[serde(rename = "chess")]
    Chess,
    #[serde(rename = "battleship")]
    Battleship,
}

impl GameKind {
    /// The kind's fixed, ordered role list. The first entry moves first.
    pub const fn roles(self) -> [Role; 2] {
        match self {
            Self::TicTacToe => [Role::X, Role::O],
            Self::Chess => [Role::White, Role::Black],
            Self::Battleship => [Role::P1, Role::P2],
        }
    }

    /// Wire name, also used as the room id prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TicTacToe => "tictactoe",
            Self::Chess => "chess",
            Self::Battleship => "battleship",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role / Mark
// ---------------------------------------------------------------------------

/// A seat label. Each room hands out the two roles of its kind, each to at
/// most one connection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Role {
    #[serde(rename = "X")]
    X,
    #[serde(rename = "O")]
    O,
    #[serde(rename = "white")]
    White,
    #[serde(rename = "black")]
    Black,
    #[serde(rename = "p1")]
    P1,
    #[serde(rename = "p2")]
    P2,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
            Self::White => "white",
            Self::Black => "black",
            Self::P1 => "p1",
            Self::P2 => "p2",
        }
    }

    /// The game this role belongs to.
    pub const fn kind(self) -> GameKind {
        match self {
            Self::X | Self::O => GameKind::TicTacToe,
            Self::White | Self::Black => GameKind::Chess,
            Self::P1 | Self::P2 => GameKind::Battleship,
        }
    }

    /// The tic-tac-toe mark this role plays, if any.
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::X => Some(Mark::X),
            Self::O => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Self::X),
            "O" => Ok(Self::O),
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            "p1" => Ok(Self::P1),
            "p2" => Ok(Self::P2),
            other => Err(ProtocolError::InvalidMessage(format!(
                "unknown role {other:?}"
            ))),
        }
    }
}

/// A tic-tac-toe mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one.
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn role(self) -> Role {
        match self {
            Self::X => Role::X,
            Self::O => Role::O,
        }
    }
}

// ---------------------------------------------------------------------------
// Winner / Seat — string-valued on the wire
// ---------------------------------------------------------------------------

/// Outcome carried by `game_over`: the winning role, or `"draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Winner {
    Role(Role),
    Draw,
}

impl From<Winner> for String {
    fn from(w: Winner) -> Self {
        match w {
            Winner::Role(role) => role.as_str().to_owned(),
            Winner::Draw => "draw".to_owned(),
        }
    }
}

impl TryFrom<String> for Winner {
    type Error = ProtocolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == "draw" {
            Ok(Self::Draw)
        } else {
            s.parse().map(Self::Role)
        }
    }
}

/// Where a connection sits in its room: a role, or the spectator gallery.
/// Serialized as the role name or `"Spectator"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Seat {
    Player(Role),
    Spectator,
}

impl From<Option<Role>> for Seat {
    fn from(role: Option<Role>) -> Self {
        role.map_or(Self::Spectator, Self::Player)
    }
}

impl From<Seat> for String {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::Player(role) => role.as_str().to_owned(),
            Seat::Spectator => "Spectator".to_owned(),
        }
    }
}

impl TryFrom<String> for Seat {
    type Error = ProtocolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == "Spectator" {
            Ok(Self::Spectator)
        } else {
            s.parse().map(Self::Player)
        }
    }
}

// ---------------------------------------------------------------------------
// Recipient
// ---------------------------------------------------------------------------

/// Who should receive an outbound event. Never on the wire; the room layer
/// pairs each event with one of these and the coordinator fans it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// Every member of the room, players and spectators.
    All,
    /// One connection.
    Client(ClientId),
    /// Every member except one (the sender of a relayed move).
    AllExcept(ClientId),
}
