//! The hall: every room and every connection, mutated one command at a
//! time.
//!
//! `Hall` is plain synchronous state. The actor in [`crate::actor`] owns
//! one and feeds it commands in arrival order, which is what keeps the
//! third-joiner race and double-disconnect cases out of reach.

use duelhall_protocol::{
    ClientAction, ClientId, GameKind, Recipient, RoomId, RoomSummary, ServerEvent,
};
use duelhall_session::{Binding, EventSender, SessionBinder, SessionError};

use crate::games::{self, Outbound};
use crate::{Departure, ROOM_CAPACITY, RoomError, RoomRegistry, roles};

/// Rooms plus the connections bound to them.
#[derive(Debug, Default)]
pub struct Hall {
    rooms: RoomRegistry,
    sessions: SessionBinder,
}

impl Hall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    pub fn sessions(&self) -> &SessionBinder {
        &self.sessions
    }

    /// Registers a new connection, unbound.
    pub fn connect(&mut self, client: ClientId, sender: EventSender) -> Result<(), RoomError> {
        self.sessions.register(client, sender)?;
        tracing::info!(%client, "client connected");
        Ok(())
    }

    /// Applies one client action. Rejections are logged and dropped; the
    /// client only notices the missing update.
    pub fn handle(&mut self, client: ClientId, action: ClientAction) {
        if let Err(error) = self.try_handle(client, action) {
            tracing::debug!(%client, %error, "action rejected");
        }
    }

    /// Like [`Hall::handle`], but reports why an action was rejected.
    pub fn try_handle(&mut self, client: ClientId, action: ClientAction) -> Result<(), RoomError> {
        match action {
            ClientAction::Join { kind, room_id } => self.join(client, kind, room_id),
            ClientAction::ListRooms => {
                if !self.sessions.is_registered(client) {
                    return Err(SessionError::NotFound(client).into());
                }
                let rooms = self.rooms.summaries();
                self.sessions.send_to(client, ServerEvent::RoomList { rooms });
                Ok(())
            }
            action => {
                let room_id = self
                    .sessions
                    .binding(client)
                    .map(|binding| binding.room_id.clone())
                    .ok_or(RoomError::NotInRoom(client))?;
                let room = self
                    .rooms
                    .get_mut(&room_id)
                    .ok_or_else(|| RoomError::UnknownRoom(room_id.clone()))?;
                let outbound = games::dispatch(room, client, action)?;
                for (_, event) in &outbound {
                    if let ServerEvent::GameOver { winner, .. } = event {
                        tracing::info!(%room_id, ?winner, "game over");
                    }
                }
                self.deliver(&room_id, outbound);
                Ok(())
            }
        }
    }

    /// Drops a connection: leave cleanup, then forget it. Safe to call
    /// more than once.
    pub fn disconnect(&mut self, client: ClientId) {
        self.leave(client);
        if self.sessions.remove(client).is_some() {
            tracing::info!(%client, "client disconnected");
        }
    }

    /// Ordered listing of live rooms.
    pub fn list_rooms(&self) -> Vec<RoomSummary> {
        self.rooms.summaries()
    }

    fn join(
        &mut self,
        client: ClientId,
        kind: GameKind,
        requested: Option<RoomId>,
    ) -> Result<(), RoomError> {
        if !self.sessions.is_registered(client) {
            return Err(SessionError::NotFound(client).into());
        }
        if let Some(room_id) = &requested {
            let room = self
                .rooms
                .get(room_id)
                .ok_or_else(|| RoomError::UnknownRoom(room_id.clone()))?;
            if room.kind() != kind {
                return Err(RoomError::InvalidAction(format!(
                    "room {room_id} hosts {}, not {kind}",
                    room.kind()
                )));
            }
            if room.is_member(client) {
                // Already here: repeat the seat details, change nothing.
                let outbound = vec![
                    (
                        Recipient::Client(client),
                        ServerEvent::RoleAssigned {
                            role: room.role_of(client),
                        },
                    ),
                    (
                        Recipient::Client(client),
                        ServerEvent::RoomJoined {
                            room_id: room_id.clone(),
                        },
                    ),
                    (
                        Recipient::Client(client),
                        ServerEvent::GameStateUpdated {
                            state: room.state().snapshot(),
                        },
                    ),
                ];
                self.deliver(room_id, outbound);
                return Ok(());
            }
        }

        self.leave(client);

        let room_id = match requested {
            Some(room_id) => room_id,
            None => match self.rooms.find_joinable(kind) {
                Some(room) => room.id().clone(),
                None => self.rooms.create_room(kind),
            },
        };
        // Leaving only ever closes the joiner's own room, never the target.
        let room = self
            .rooms
            .get_mut(&room_id)
            .ok_or_else(|| RoomError::UnknownRoom(room_id.clone()))?;

        let role = roles::next_role(kind, &room.held_roles());
        match role {
            Some(role) => room.add_player(client, role)?,
            None => room.add_spectator(client)?,
        }

        let mut outbound = vec![
            (Recipient::Client(client), ServerEvent::RoleAssigned { role }),
            (
                Recipient::Client(client),
                ServerEvent::RoomJoined {
                    room_id: room_id.clone(),
                },
            ),
        ];
        let started = role.is_some() && room.player_count() == ROOM_CAPACITY;
        if started {
            outbound.push((
                Recipient::All,
                ServerEvent::GameStart {
                    players: room.held_roles(),
                },
            ));
            outbound.extend(games::begin(room));
        }
        outbound.push((
            Recipient::All,
            ServerEvent::GameStateUpdated {
                state: room.state().snapshot(),
            },
        ));

        self.sessions.bind(
            client,
            Binding {
                room_id: room_id.clone(),
                role,
            },
        )?;
        tracing::info!(%client, %room_id, ?role, "client joined");
        if started {
            tracing::info!(%room_id, "game started");
        }
        self.deliver(&room_id, outbound);
        Ok(())
    }

    /// Leave cleanup for the connection's current binding, if any.
    fn leave(&mut self, client: ClientId) {
        let Some(binding) = self.sessions.unbind(client) else {
            return;
        };
        let room_id = binding.room_id;
        let Some(room) = self.rooms.get_mut(&room_id) else {
            return;
        };

        match room.remove_member(client) {
            Some(Departure::Player(role)) => {
                room.state_mut().pause(role);
                let outbound = vec![
                    (Recipient::All, ServerEvent::PlayerLeft),
                    (
                        Recipient::All,
                        ServerEvent::GameStateUpdated {
                            state: room.state().snapshot(),
                        },
                    ),
                ];
                tracing::info!(%client, %room_id, %role, "player left");
                self.deliver(&room_id, outbound);
            }
            Some(Departure::Spectator) => {
                tracing::debug!(%client, %room_id, "spectator left");
            }
            None => {}
        }

        if self.rooms.remove_if_empty(&room_id).is_some() {
            let released = self.sessions.unbind_room(&room_id);
            if !released.is_empty() {
                tracing::debug!(%room_id, spectators = released.len(), "spectators released");
            }
        }
    }

    /// Fans events out to the room's members in order. Members whose
    /// writer is gone are skipped.
    fn deliver(&self, room_id: &RoomId, outbound: Outbound) {
        let Some(room) = self.rooms.get(room_id) else {
            return;
        };
        for (recipient, event) in outbound {
            match recipient {
                Recipient::All => {
                    for member in room.members() {
                        self.sessions.send_to(member, event.clone());
                    }
                }
                Recipient::Client(client) => {
                    self.sessions.send_to(client, event);
                }
                Recipient::AllExcept(excluded) => {
                    for member in room.members().filter(|member| *member != excluded) {
                        self.sessions.send_to(member, event.clone());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duelhall_protocol::{Role, Seat, StateSnapshot, Winner};
    use serde_json::json;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn connect(hall: &mut Hall, id: u64) -> UnboundedReceiver<ServerEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        hall.connect(ClientId(id), tx).unwrap();
        rx
    }

    fn drain(rx: &mut UnboundedReceiver<ServerEvent>) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn join(hall: &mut Hall, id: u64, kind: GameKind) {
        hall.handle(ClientId(id), ClientAction::Join { kind, room_id: None });
    }

    fn room_of(hall: &Hall, id: u64) -> RoomId {
        hall.sessions()
            .binding(ClientId(id))
            .map(|binding| binding.room_id.clone())
            .unwrap()
    }

    #[test]
    fn test_first_joiner_waits_alone() {
        let mut hall = Hall::new();
        let mut rx = connect(&mut hall, 1);
        join(&mut hall, 1, GameKind::TicTacToe);

        let events = drain(&mut rx);
        assert_eq!(events[0], ServerEvent::RoleAssigned { role: Some(Role::X) });
        assert!(matches!(events[1], ServerEvent::RoomJoined { .. }));
        let ServerEvent::GameStateUpdated { state } = &events[2] else {
            panic!("expected state, got {events:?}");
        };
        assert!(!state.is_active());
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_second_joiner_starts_the_game() {
        let mut hall = Hall::new();
        let mut a = connect(&mut hall, 1);
        let mut b = connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::Chess);
        drain(&mut a);
        join(&mut hall, 2, GameKind::Chess);

        assert_eq!(room_of(&hall, 1), room_of(&hall, 2));
        let to_b = drain(&mut b);
        assert_eq!(to_b[0], ServerEvent::RoleAssigned { role: Some(Role::Black) });
        assert_eq!(
            to_b[2],
            ServerEvent::GameStart {
                players: vec![Role::White, Role::Black]
            }
        );
        let to_a = drain(&mut a);
        assert!(matches!(to_a[0], ServerEvent::GameStart { .. }));
        assert!(matches!(&to_a[1], ServerEvent::GameStateUpdated { state } if state.is_active()));
    }

    #[test]
    fn test_third_joiner_gets_a_new_room() {
        let mut hall = Hall::new();
        for id in 1..=3 {
            connect(&mut hall, id);
            join(&mut hall, id, GameKind::TicTacToe);
        }
        assert_eq!(room_of(&hall, 1), room_of(&hall, 2));
        assert_ne!(room_of(&hall, 1), room_of(&hall, 3));
        assert_eq!(hall.rooms().len(), 2);
        for room in hall.rooms().ordered() {
            assert!(room.player_count() <= ROOM_CAPACITY);
            let roles = room.held_roles();
            if roles.len() == 2 {
                assert_ne!(roles[0], roles[1]);
            }
        }
    }

    #[test]
    fn test_kinds_never_share_rooms() {
        let mut hall = Hall::new();
        connect(&mut hall, 1);
        connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::TicTacToe);
        join(&mut hall, 2, GameKind::Battleship);
        assert_ne!(room_of(&hall, 1), room_of(&hall, 2));
    }

    #[test]
    fn test_actions_before_join_are_dropped() {
        let mut hall = Hall::new();
        let mut rx = connect(&mut hall, 1);
        let result = hall.try_handle(ClientId(1), ClientAction::Move { index: 0 });
        assert!(matches!(result, Err(RoomError::NotInRoom(ClientId(1)))));
        hall.handle(ClientId(1), ClientAction::ChatMessage { text: "hi".into() });
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_unregistered_client_cannot_join() {
        let mut hall = Hall::new();
        let result = hall.try_handle(
            ClientId(5),
            ClientAction::Join {
                kind: GameKind::Chess,
                room_id: None,
            },
        );
        assert!(matches!(result, Err(RoomError::Session(_))));
        assert!(hall.rooms().is_empty());
    }

    #[test]
    fn test_tictactoe_match_through_the_hall() {
        let mut hall = Hall::new();
        let mut x = connect(&mut hall, 1);
        let mut o = connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::TicTacToe);
        join(&mut hall, 2, GameKind::TicTacToe);
        drain(&mut x);
        drain(&mut o);

        for (who, index) in [(1, 0), (2, 3), (1, 1), (2, 4), (1, 2)] {
            hall.handle(ClientId(who), ClientAction::Move { index });
        }
        let events = drain(&mut o);
        let Some(ServerEvent::GameOver { winner, .. }) = events.last() else {
            panic!("expected game over, got {events:?}");
        };
        assert_eq!(*winner, Winner::Role(Role::X));
        assert_eq!(drain(&mut x).len(), events.len());
    }

    #[test]
    fn test_chess_move_skips_the_sender() {
        let mut hall = Hall::new();
        let mut white = connect(&mut hall, 1);
        let mut black = connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::Chess);
        join(&mut hall, 2, GameKind::Chess);
        drain(&mut white);
        drain(&mut black);

        let descriptor = json!({"from": "e2", "to": "e4", "fen": "f1"});
        hall.handle(
            ClientId(1),
            ClientAction::ChessMove {
                descriptor: descriptor.clone(),
            },
        );
        assert!(drain(&mut white).is_empty());
        assert_eq!(drain(&mut black), vec![ServerEvent::ChessMove { descriptor }]);
    }

    #[test]
    fn test_explicit_join_into_full_room_spectates() {
        let mut hall = Hall::new();
        for id in 1..=2 {
            connect(&mut hall, id);
            join(&mut hall, id, GameKind::Chess);
        }
        let room_id = room_of(&hall, 1);
        let mut watcher = connect(&mut hall, 3);
        hall.handle(
            ClientId(3),
            ClientAction::Join {
                kind: GameKind::Chess,
                room_id: Some(room_id.clone()),
            },
        );
        let events = drain(&mut watcher);
        assert_eq!(events[0], ServerEvent::RoleAssigned { role: None });
        assert_eq!(events[1], ServerEvent::RoomJoined { room_id: room_id.clone() });
        assert_eq!(hall.rooms().get(&room_id).unwrap().player_count(), 2);

        hall.handle(ClientId(3), ClientAction::ChatMessage { text: "gl".into() });
        assert_eq!(
            drain(&mut watcher),
            vec![ServerEvent::ChatMessage {
                id: ClientId(3),
                role: Seat::Spectator,
                text: "gl".into()
            }]
        );
    }

    #[test]
    fn test_explicit_join_into_unknown_or_mismatched_room_is_ignored() {
        let mut hall = Hall::new();
        connect(&mut hall, 1);
        join(&mut hall, 1, GameKind::Chess);
        let chess_room = room_of(&hall, 1);
        let mut rx = connect(&mut hall, 2);

        let unknown = hall.try_handle(
            ClientId(2),
            ClientAction::Join {
                kind: GameKind::Chess,
                room_id: Some(RoomId::from("chess_0")),
            },
        );
        assert!(matches!(unknown, Err(RoomError::UnknownRoom(_))));
        let mismatched = hall.try_handle(
            ClientId(2),
            ClientAction::Join {
                kind: GameKind::TicTacToe,
                room_id: Some(chess_room),
            },
        );
        assert!(matches!(mismatched, Err(RoomError::InvalidAction(_))));
        assert!(drain(&mut rx).is_empty());
        assert!(hall.sessions().binding(ClientId(2)).is_none());
    }

    #[test]
    fn test_chat_reaches_everyone_in_order() {
        let mut hall = Hall::new();
        let mut a = connect(&mut hall, 1);
        let mut b = connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::Battleship);
        join(&mut hall, 2, GameKind::Battleship);
        drain(&mut a);
        drain(&mut b);

        hall.handle(ClientId(1), ClientAction::ChatMessage { text: "one".into() });
        hall.handle(ClientId(2), ClientAction::ChatMessage { text: "two".into() });
        for rx in [&mut a, &mut b] {
            let texts: Vec<String> = drain(rx)
                .into_iter()
                .filter_map(|event| match event {
                    ServerEvent::ChatMessage { text, .. } => Some(text),
                    _ => None,
                })
                .collect();
            assert_eq!(texts, vec!["one", "two"]);
        }
    }

    #[test]
    fn test_disconnect_pauses_and_notifies_remaining_player() {
        let mut hall = Hall::new();
        let mut x = connect(&mut hall, 1);
        let _o = connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::TicTacToe);
        join(&mut hall, 2, GameKind::TicTacToe);
        hall.handle(ClientId(1), ClientAction::Move { index: 4 });
        drain(&mut x);

        hall.disconnect(ClientId(2));
        let events = drain(&mut x);
        assert_eq!(events[0], ServerEvent::PlayerLeft);
        let ServerEvent::GameStateUpdated { state } = &events[1] else {
            panic!("expected state, got {events:?}");
        };
        assert!(!state.is_active());
        assert!(matches!(state, StateSnapshot::TicTacToe { board, .. } if board.iter().all(Option::is_none)));

        // Second cleanup is a no-op.
        hall.disconnect(ClientId(2));
        assert!(drain(&mut x).is_empty());
        assert_eq!(hall.sessions().len(), 1);
    }

    #[test]
    fn test_vacated_seat_is_refilled_and_game_restarts() {
        let mut hall = Hall::new();
        connect(&mut hall, 1);
        connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::TicTacToe);
        join(&mut hall, 2, GameKind::TicTacToe);
        hall.disconnect(ClientId(1));

        let mut c = connect(&mut hall, 3);
        join(&mut hall, 3, GameKind::TicTacToe);
        assert_eq!(room_of(&hall, 3), room_of(&hall, 2));
        let events = drain(&mut c);
        assert_eq!(events[0], ServerEvent::RoleAssigned { role: Some(Role::X) });
        assert!(matches!(events[2], ServerEvent::GameStart { .. }));
    }

    #[test]
    fn test_last_player_out_removes_room_and_releases_spectators() {
        let mut hall = Hall::new();
        connect(&mut hall, 1);
        join(&mut hall, 1, GameKind::Chess);
        let room_id = room_of(&hall, 1);
        connect(&mut hall, 9);
        hall.handle(
            ClientId(9),
            ClientAction::Join {
                kind: GameKind::Chess,
                room_id: Some(room_id.clone()),
            },
        );
        assert_eq!(hall.rooms().get(&room_id).unwrap().player_count(), 2);

        connect(&mut hall, 10);
        connect(&mut hall, 11);
        join(&mut hall, 10, GameKind::Chess);
        join(&mut hall, 11, GameKind::Chess);
        let other = room_of(&hall, 10);
        hall.handle(
            ClientId(11),
            ClientAction::Join {
                kind: GameKind::Chess,
                room_id: Some(room_id.clone()),
            },
        );
        // Client 11 left `other` and found `room_id` full.
        assert_eq!(hall.sessions().binding(ClientId(11)).unwrap().role, None);
        assert!(hall.rooms().contains(&other));

        hall.disconnect(ClientId(1));
        hall.disconnect(ClientId(9));
        assert!(!hall.rooms().contains(&room_id));
        assert!(hall.sessions().binding(ClientId(11)).is_none());
    }

    #[test]
    fn test_rejoin_detaches_previous_room() {
        let mut hall = Hall::new();
        connect(&mut hall, 1);
        let mut b = connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::TicTacToe);
        join(&mut hall, 2, GameKind::TicTacToe);
        let first = room_of(&hall, 1);
        drain(&mut b);

        join(&mut hall, 1, GameKind::Chess);
        assert_ne!(room_of(&hall, 1), first);
        assert_eq!(hall.rooms().get(&first).unwrap().player_count(), 1);
        assert_eq!(drain(&mut b)[0], ServerEvent::PlayerLeft);
    }

    fn ready(hall: &mut Hall, id: u64, cells: &[u8]) {
        hall.try_handle(
            ClientId(id),
            ClientAction::BattleshipReady {
                cells: cells.to_vec(),
            },
        )
        .unwrap();
    }

    fn battle_started(events: &[ServerEvent]) -> bool {
        events
            .iter()
            .any(|event| matches!(event, ServerEvent::BattleStart { .. }))
    }

    #[test]
    fn test_fleet_committed_before_opponent_joins_is_kept() {
        let mut hall = Hall::new();
        let mut a = connect(&mut hall, 1);
        let mut b = connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::Battleship);
        ready(&mut hall, 1, &[0, 1, 2, 3, 4]);
        join(&mut hall, 2, GameKind::Battleship);
        assert!(!battle_started(&drain(&mut b)));

        ready(&mut hall, 2, &[50]);
        let events = drain(&mut b);
        assert!(battle_started(&events), "got {events:?}");
        assert!(battle_started(&drain(&mut a)));
        assert!(hall.rooms().get(&room_of(&hall, 1)).unwrap().state().is_active());
    }

    #[test]
    fn test_replacement_player_commits_its_own_fleet() {
        let mut hall = Hall::new();
        let mut a = connect(&mut hall, 1);
        connect(&mut hall, 2);
        join(&mut hall, 1, GameKind::Battleship);
        join(&mut hall, 2, GameKind::Battleship);
        ready(&mut hall, 1, &[10]);
        ready(&mut hall, 2, &[20]);
        drain(&mut a);

        hall.disconnect(ClientId(2));
        let events = drain(&mut a);
        let Some(ServerEvent::GameStateUpdated { state }) = events.last() else {
            panic!("expected paused state, got {events:?}");
        };
        assert!(matches!(
            state,
            StateSnapshot::Battleship { ready: committed, active: false, .. } if *committed == vec![Role::P1]
        ));

        let mut c = connect(&mut hall, 3);
        join(&mut hall, 3, GameKind::Battleship);
        assert_eq!(drain(&mut c)[0], ServerEvent::RoleAssigned { role: Some(Role::P2) });
        assert!(!battle_started(&drain(&mut a)));
        let room_id = room_of(&hall, 3);
        assert!(!hall.rooms().get(&room_id).unwrap().state().is_active());

        ready(&mut hall, 3, &[30]);
        assert!(battle_started(&drain(&mut a)));
    }

    #[test]
    fn test_explicit_join_of_own_room_changes_nothing() {
        let mut hall = Hall::new();
        let mut rx = connect(&mut hall, 1);
        join(&mut hall, 1, GameKind::Chess);
        let room_id = room_of(&hall, 1);
        drain(&mut rx);

        hall.try_handle(
            ClientId(1),
            ClientAction::Join {
                kind: GameKind::Chess,
                room_id: Some(room_id.clone()),
            },
        )
        .unwrap();

        assert!(hall.rooms().contains(&room_id));
        assert_eq!(room_of(&hall, 1), room_id);
        assert_eq!(hall.rooms().get(&room_id).unwrap().player_count(), 1);
        let events = drain(&mut rx);
        assert_eq!(events[0], ServerEvent::RoleAssigned { role: Some(Role::White) });
        assert_eq!(events[1], ServerEvent::RoomJoined { room_id });
        assert!(matches!(events[2], ServerEvent::GameStateUpdated { .. }));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_rejected_explicit_join_keeps_current_seat() {
        let mut hall = Hall::new();
        connect(&mut hall, 1);
        join(&mut hall, 1, GameKind::TicTacToe);
        let room_id = room_of(&hall, 1);

        let result = hall.try_handle(
            ClientId(1),
            ClientAction::Join {
                kind: GameKind::TicTacToe,
                room_id: Some(RoomId::from("tictactoe_0")),
            },
        );
        assert!(matches!(result, Err(RoomError::UnknownRoom(_))));
        assert_eq!(room_of(&hall, 1), room_id);
        assert!(hall.rooms().contains(&room_id));
    }

    #[test]
    fn test_list_rooms_reaches_unbound_clients() {
        let mut hall = Hall::new();
        connect(&mut hall, 1);
        join(&mut hall, 1, GameKind::Battleship);
        let mut rx = connect(&mut hall, 2);
        hall.handle(ClientId(2), ClientAction::ListRooms);

        let events = drain(&mut rx);
        let [ServerEvent::RoomList { rooms }] = &events[..] else {
            panic!("expected room list, got {events:?}");
        };
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].kind, GameKind::Battleship);
        assert_eq!(rooms[0].players, 1);
        assert_eq!(hall.list_rooms(), *rooms);
    }
}
