//! Terminal-outcome checks. Pure functions over game data.

use std::collections::BTreeSet;

use duelhall_protocol::{BOARD_CELLS, Mark, Winner};

/// The eight three-in-a-row lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Evaluates a tic-tac-toe board.
///
/// Returns the winning role if some line holds three equal marks, `Draw`
/// if the board is full without one, and `None` while undecided.
pub fn check_line_win(board: &[Option<Mark>; BOARD_CELLS]) -> Option<Winner> {
    for [a, b, c] in LINES {
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some(Winner::Role(mark.role()));
            }
        }
    }
    if board.iter().all(Option::is_some) {
        Some(Winner::Draw)
    } else {
        None
    }
}

/// Returns `true` once every ship cell appears in `attacked`.
pub fn all_sunk(ships: &BTreeSet<u8>, attacked: &[u8]) -> bool {
    ships.iter().all(|cell| attacked.contains(cell))
}
