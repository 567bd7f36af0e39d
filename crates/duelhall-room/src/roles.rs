//! Role assignment.

use duelhall_protocol::{GameKind, Role};

/// Returns the first role of `kind` that is not in `held`, or `None` when
/// both seats are taken.
///
/// ```
/// use duelhall_protocol::{GameKind, Role};
/// use duelhall_room::next_role;
///
/// assert_eq!(next_role(GameKind::Chess, &[]), Some(Role::White));
/// assert_eq!(next_role(GameKind::Chess, &[Role::White]), Some(Role::Black));
/// assert_eq!(next_role(GameKind::Chess, &[Role::Black, Role::White]), None);
/// ```
pub fn next_role(kind: GameKind, held: &[Role]) -> Option<Role> {
    kind.roles().into_iter().find(|role| !held.contains(role))
}

/// The other role of the same game.
pub fn opponent(role: Role) -> Role {
    let [first, second] = role.kind().roles();
    if role == first { second } else { first }
}
