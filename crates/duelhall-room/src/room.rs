//! A single room: two seats, a spectator gallery, and one game.

use duelhall_protocol::{ClientId, GameKind, Role, RoomId, RoomSummary};

use crate::{GameState, RoomError};

/// Seats per room.
pub const ROOM_CAPACITY: usize = 2;

/// How a member left a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Departure {
    /// A seated player gave up `Role`.
    Player(Role),
    /// A spectator stopped watching.
    Spectator,
}

/// One game session scoped to a single [`GameKind`].
///
/// Invariant: at most [`ROOM_CAPACITY`] players, each holding a distinct
/// role of the room's kind. The registry deletes the room as soon as its
/// last player leaves.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    kind: GameKind,
    /// Seated players in join order.
    players: Vec<(ClientId, Role)>,
    spectators: Vec<ClientId>,
    state: GameState,
}

impl Room {
    pub(crate) fn new(id: RoomId, kind: GameKind) -> Self {
        Self {
            id,
            kind,
            players: Vec::with_capacity(ROOM_CAPACITY),
            spectators: Vec::new(),
            state: GameState::new(kind),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Seated players in join order.
    pub fn players(&self) -> &[(ClientId, Role)] {
        &self.players
    }

    pub fn spectators(&self) -> &[ClientId] {
        &self.spectators
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn has_capacity(&self) -> bool {
        self.players.len() < ROOM_CAPACITY
    }

    /// The roles currently held, in join order.
    pub fn held_roles(&self) -> Vec<Role> {
        self.players.iter().map(|(_, role)| *role).collect()
    }

    /// The role `client` holds here, if it is seated.
    pub fn role_of(&self, client: ClientId) -> Option<Role> {
        self.players
            .iter()
            .find(|(id, _)| *id == client)
            .map(|(_, role)| *role)
    }

    pub fn is_member(&self, client: ClientId) -> bool {
        self.role_of(client).is_some() || self.spectators.contains(&client)
    }

    /// Everyone who receives room broadcasts: players, then spectators.
    pub fn members(&self) -> impl Iterator<Item = ClientId> + '_ {
        self.players
            .iter()
            .map(|(id, _)| *id)
            .chain(self.spectators.iter().copied())
    }

    /// Seats `client` as `role`.
    ///
    /// # Errors
    /// [`RoomError::AlreadyInRoom`] if the client is already a member,
    /// [`RoomError::RoomFull`] if both seats are taken, and
    /// [`RoomError::InvalidAction`] if the role is held or belongs to
    /// another game.
    pub(crate) fn add_player(&mut self, client: ClientId, role: Role) -> Result<(), RoomError> {
        if self.is_member(client) {
            return Err(RoomError::AlreadyInRoom(client, self.id.clone()));
        }
        if !self.has_capacity() {
            return Err(RoomError::RoomFull(self.id.clone()));
        }
        if role.kind() != self.kind || self.players.iter().any(|(_, held)| *held == role) {
            return Err(RoomError::InvalidAction(format!(
                "role {role} is not available in {}",
                self.id
            )));
        }
        self.players.push((client, role));
        Ok(())
    }

    /// Adds `client` to the spectator gallery.
    pub(crate) fn add_spectator(&mut self, client: ClientId) -> Result<(), RoomError> {
        if self.is_member(client) {
            return Err(RoomError::AlreadyInRoom(client, self.id.clone()));
        }
        self.spectators.push(client);
        Ok(())
    }

    /// Removes `client` from the room. `None` if it was not a member.
    pub(crate) fn remove_member(&mut self, client: ClientId) -> Option<Departure> {
        if let Some(pos) = self.players.iter().position(|(id, _)| *id == client) {
            let (_, role) = self.players.remove(pos);
            return Some(Departure::Player(role));
        }
        let pos = self.spectators.iter().position(|id| *id == client)?;
        self.spectators.remove(pos);
        Some(Departure::Spectator)
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            room_id: self.id.clone(),
            kind: self.kind,
            players: self.players.len(),
            capacity: ROOM_CAPACITY,
        }
    }
}
