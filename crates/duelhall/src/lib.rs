//! # Duelhall
//!
//! A real-time game hall for two-player browser games: tic-tac-toe with
//! server-side rules, a chess relay, and battleship, plus room chat and
//! spectators.
//!
//! Clients speak JSON over WebSocket. Every room mutation happens inside a
//! single hall actor, so actions are applied and broadcast in arrival order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use duelhall::prelude::*;
//!
//! # async fn start() -> Result<(), DuelhallError> {
//! let server = DuelhallServer::builder()
//!     .config(ServerConfig::from_env())
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod config;
mod error;
mod handler;
mod server;

pub use config::{DEFAULT_BIND_ADDR, DEFAULT_COMMAND_BUFFER, ServerConfig};
pub use error::DuelhallError;
pub use server::{DuelhallServer, DuelhallServerBuilder};

/// Everything needed to run a server or write a client against it.
pub mod prelude {
    pub use crate::{DuelhallError, DuelhallServer, DuelhallServerBuilder, ServerConfig};
    pub use duelhall_protocol::{
        BattlePhase, ClientAction, ClientId, Codec, GameKind, JsonCodec, Mark, Role, RoomId,
        RoomSummary, Seat, ServerEvent, StateSnapshot, Winner,
    };
    pub use duelhall_room::{HallHandle, RoomError};
}
