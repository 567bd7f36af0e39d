//! Rooms, the three game state machines, and the hall that coordinates
//! them.
//!
//! All mutation goes through one [`Hall`], owned by a single actor task
//! (see [`spawn_hall`]). Connection tasks talk to it through a cloneable
//! [`HallHandle`].
//!
//! # Key types
//!
//! - [`Hall`] — rooms plus connection bindings; join, leave, dispatch
//! - [`HallHandle`] — send commands to the running hall actor
//! - [`RoomRegistry`] — owns every live room, first-fit matchmaking
//! - [`Room`] — two seats, spectators, one [`GameState`]

mod actor;
mod chat;
mod error;
mod games;
mod hall;
mod registry;
mod roles;
mod room;
mod rules;
mod state;

pub use actor::{HallHandle, spawn_hall};
pub use error::RoomError;
pub use games::Outbound;
pub use hall::Hall;
pub use registry::RoomRegistry;
pub use roles::{next_role, opponent};
pub use room::{Departure, ROOM_CAPACITY, Room};
pub use rules::{LINES, all_sunk, check_line_win};
pub use state::{BattleshipState, CHESS_START, ChessState, GameState, TicTacToeState};
