mod engine;
mod game;
mod types;

pub mod rules;

pub use engine::{MoveError, apply_move};
pub use game::{Game, GameId};
pub use rules::check_winner;
pub use types::{
    BOARD_SIZE, Board, BoardParseError, EMPTY_SYMBOL, GameStatus, Mark, OutOfBounds, Square,
};
