//! Move application for tic-tac-toe.
//!
//! [`apply_move`] is the only state transition a [`Game`] has. It is
//! pure: it takes a snapshot and returns the next one, so callers can
//! validate and commit under a single lock without ever exposing a
//! half-updated record.

use super::game::Game;
use super::rules::{check_winner, is_full};
use super::types::{BOARD_SIZE, GameStatus, Square};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Reasons a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("cell index {index} is out of range (must be 0-8)")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
    },
    /// The game already has a winner or ended in a draw.
    #[display("game already finished")]
    GameFinished,
    /// The target cell already holds a mark.
    #[display("cell {index} is already occupied")]
    CellOccupied {
        /// The occupied index.
        index: usize,
    },
}

/// Places the current turn's mark at `index` and returns the next game state.
///
/// Checks run in order: index range, terminal game, occupied cell. After
/// placing the mark a completed line wins (turn left as is), otherwise a
/// full board is a draw, otherwise the turn passes to the opponent.
#[instrument(skip(game), fields(game_id = %game.id(), turn = %game.turn()))]
pub fn apply_move(game: &Game, index: usize) -> Result<Game, MoveError> {
    if index >= BOARD_SIZE {
        return Err(MoveError::InvalidIndex { index });
    }
    if game.is_finished() {
        return Err(MoveError::GameFinished);
    }
    if !game.board().is_empty(index) {
        return Err(MoveError::CellOccupied { index });
    }

    let mut next = game.clone();
    let mark = *game.turn();
    next.board_mut()
        .set(index, Square::Occupied(mark))
        .map_err(|_| MoveError::InvalidIndex { index })?;

    if let Some(winner) = check_winner(next.board()) {
        next.set_status(GameStatus::Won(winner));
    } else if is_full(next.board()) {
        next.set_status(GameStatus::Draw);
    } else {
        next.set_turn(mark.opponent());
    }

    debug!(board = %next.board(), status = ?next.status(), "Move applied");
    Ok(next)
}
