//! Wire protocol for Duelhall.
//!
//! Everything that crosses the socket lives here: the inbound
//! [`ClientAction`]s, the outbound [`ServerEvent`]s, the public
//! [`StateSnapshot`] of a game, and the identity types they carry
//! ([`ClientId`], [`RoomId`], [`GameKind`], [`Role`]).
//!
//! Messages are JSON objects tagged by a `"type"` field:
//!
//! ```text
//! → {"type":"join","kind":"tictactoe"}
//! ← {"type":"role_assigned","role":"X"}
//! ← {"type":"room_joined","room_id":"tictactoe_1718000000000"}
//! → {"type":"move","index":4}
//! ```

mod codec;
mod error;
mod message;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use message::{
    BattlePhase, ClientAction, RoomSummary, ServerEvent, StateSnapshot,
};
pub use types::{
    ClientId, GameKind, Mark, Recipient, Role, RoomId, Seat, Winner,
    BOARD_CELLS, GRID_CELLS,
};
