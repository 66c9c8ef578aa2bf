//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// The eight index triples that win the game, in scan order.
#[rustfmt::skip]
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first fully
/// matched mark is returned. Returns `None` when no line is complete.
#[instrument(skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        match (board.get(a)?, board.get(b)?, board.get(c)?) {
            (Square::Occupied(m1), Square::Occupied(m2), Square::Occupied(m3))
                if m1 == m2 && m2 == m3 =>
            {
                Some(m1)
            }
            _ => None,
        }
    })
}
