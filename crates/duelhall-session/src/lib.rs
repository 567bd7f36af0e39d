//! Connection sessions for Duelhall.
//!
//! Every accepted socket gets a [`Session`]: its outbound event channel and,
//! once it has joined a game, a [`Binding`] to one room and (unless it is
//! spectating) one role.
//!
//! # How it fits in the stack
//!
//! ```text
//! Room Layer (above)     ← resolves rooms and roles, runs the games
//!     ↕
//! Session Layer (this)   ← who is connected, where they are bound
//!     ↕
//! Protocol Layer (below) ← ClientId, RoomId, Role, ServerEvent
//! ```
//!
//! Bindings are keyed by connection identity, so a connection can hold at
//! most one binding at a time; binding again hands back the previous one
//! for the caller to clean up.

mod binder;
mod error;
mod session;

pub use binder::SessionBinder;
pub use error::SessionError;
pub use session::{Binding, EventSender, Session};
