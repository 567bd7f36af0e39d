//! Room registry: the one owner of every live room.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use duelhall_protocol::{GameKind, RoomId, RoomSummary};

use crate::Room;

/// All live rooms, searchable in creation order.
///
/// Every operation is total: unknown ids are simply not found.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, Room>,
    /// Creation order, for first-fit matchmaking and listings.
    order: Vec<RoomId>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first room (oldest first) of `kind` with a free seat.
    pub fn find_joinable(&self, kind: GameKind) -> Option<&Room> {
        self.ordered()
            .find(|room| room.kind() == kind && room.has_capacity())
    }

    /// Creates an empty room of `kind` and returns its id.
    ///
    /// Ids are `<kind>_<unix millis>`, with `-2`, `-3`, ... appended when
    /// several rooms are opened within the same millisecond.
    pub fn create_room(&mut self, kind: GameKind) -> RoomId {
        let room_id = self.fresh_id(kind);
        self.rooms
            .insert(room_id.clone(), Room::new(room_id.clone(), kind));
        self.order.push(room_id.clone());
        tracing::info!(%room_id, %kind, "room created");
        room_id
    }

    /// Deletes the room if it has no players left and returns it so the
    /// caller can release any spectators. No-op otherwise.
    pub fn remove_if_empty(&mut self, room_id: &RoomId) -> Option<Room> {
        if self.rooms.get(room_id)?.player_count() > 0 {
            return None;
        }
        let room = self.rooms.remove(room_id)?;
        self.order.retain(|id| id != room_id);
        tracing::info!(%room_id, "room removed");
        Some(room)
    }

    pub fn get(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn get_mut(&mut self, room_id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(room_id)
    }

    pub fn contains(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms in creation order.
    pub fn ordered(&self) -> impl Iterator<Item = &Room> + '_ {
        self.order.iter().filter_map(|id| self.rooms.get(id))
    }

    /// Listing entries in creation order.
    pub fn summaries(&self) -> Vec<RoomSummary> {
        self.ordered().map(Room::summary).collect()
    }

    fn fresh_id(&self, kind: GameKind) -> RoomId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let base = format!("{kind}_{millis}");
        let mut candidate = RoomId(base.clone());
        let mut n = 2;
        while self.rooms.contains_key(&candidate) {
            candidate = RoomId(format!("{base}-{n}"));
            n += 1;
        }
        candidate
    }
}
