//! The session binder: tracks every live connection and its room binding.
//!
//! # Concurrency note
//!
//! `SessionBinder` is a plain `HashMap` with no locking. It is owned by the
//! hall task, which processes commands one at a time, so every mutation is
//! already serialized.

use std::collections::HashMap;

use duelhall_protocol::{ClientId, RoomId, ServerEvent};

use crate::{Binding, EventSender, Session, SessionError};

/// Registry of live connections.
///
/// ```text
/// register() ──→ bind() ──→ unbind() ──→ remove()
///   [unbound]    [bound]    [unbound]     [gone]
///                  │  ↑
///                  └──┘ bind() again returns the old binding
/// ```
#[derive(Debug, Default)]
pub struct SessionBinder {
    sessions: HashMap<ClientId, Session>,
}

impl SessionBinder {
    /// Creates an empty binder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a freshly accepted connection.
    ///
    /// # Errors
    /// Returns [`SessionError::AlreadyConnected`] if the id is taken.
    pub fn register(
        &mut self,
        client: ClientId,
        sender: EventSender,
    ) -> Result<(), SessionError> {
        if self.sessions.contains_key(&client) {
            return Err(SessionError::AlreadyConnected(client));
        }
        self.sessions.insert(client, Session::new(client, sender));
        tracing::debug!(%client, "session registered");
        Ok(())
    }

    /// Forgets a connection entirely. Returns its session if it was still
    /// registered; a second call returns `None`.
    pub fn remove(&mut self, client: ClientId) -> Option<Session> {
        let session = self.sessions.remove(&client)?;
        tracing::debug!(%client, "session removed");
        Some(session)
    }

    /// Binds a connection to a room seat, replacing any previous binding.
    ///
    /// Returns the binding that was replaced so the caller can run its
    /// leave cleanup.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] if the connection is not
    /// registered.
    pub fn bind(
        &mut self,
        client: ClientId,
        binding: Binding,
    ) -> Result<Option<Binding>, SessionError> {
        let session = self
            .sessions
            .get_mut(&client)
            .ok_or(SessionError::NotFound(client))?;
        Ok(session.binding.replace(binding))
    }

    /// Clears a connection's binding. Idempotent: returns `None` if the
    /// connection is unknown or already unbound.
    pub fn unbind(&mut self, client: ClientId) -> Option<Binding> {
        self.sessions.get_mut(&client)?.binding.take()
    }

    /// Unbinds every connection bound to `room_id` (used when a room is
    /// removed while spectators are still watching). Returns who was
    /// unbound.
    pub fn unbind_room(&mut self, room_id: &RoomId) -> Vec<ClientId> {
        let mut unbound = Vec::new();
        for session in self.sessions.values_mut() {
            if session
                .binding
                .as_ref()
                .is_some_and(|b| &b.room_id == room_id)
            {
                session.binding = None;
                unbound.push(session.client);
            }
        }
        unbound
    }

    /// The connection's current binding, if any.
    pub fn binding(&self, client: ClientId) -> Option<&Binding> {
        self.sessions.get(&client)?.binding.as_ref()
    }

    /// Queues an event for one connection. Unknown connections and closed
    /// writers are skipped silently; returns whether it was queued.
    pub fn send_to(&self, client: ClientId, event: ServerEvent) -> bool {
        self.sessions
            .get(&client)
            .is_some_and(|session| session.send(event))
    }

    /// Returns `true` if the connection is registered.
    pub fn is_registered(&self, client: ClientId) -> bool {
        self.sessions.contains_key(&client)
    }

    /// Number of registered connections.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no connections are registered.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
