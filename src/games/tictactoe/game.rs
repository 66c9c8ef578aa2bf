//! Game record stored per match.

use super::types::{Board, GameStatus, Mark};
use derive_getters::Getters;
use tracing::instrument;

/// Opaque unique identifier for a game.
pub type GameId = String;

/// A single tic-tac-toe match.
///
/// Records are only created through [`Game::new`] and only advanced
/// through [`apply_move`](super::apply_move), which keeps the board,
/// turn and status consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Game {
    /// Identifier assigned at creation.
    id: GameId,
    /// The board.
    board: Board,
    /// Mark to move next. Meaningless once the game is terminal.
    turn: Mark,
    /// Game status.
    status: GameStatus,
}

impl Game {
    /// Creates a fresh game: empty board, `A` to move.
    #[instrument]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            board: Board::new(),
            turn: Mark::A,
            status: GameStatus::InProgress,
        }
    }

    /// Winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    pub(super) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(super) fn set_turn(&mut self, turn: Mark) {
        self.turn = turn;
    }

    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}
