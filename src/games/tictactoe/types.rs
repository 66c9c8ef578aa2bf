//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Symbol used for an empty square in the compact board encoding.
pub const EMPTY_SYMBOL: char = '-';

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Mark {
    /// First player (always moves first).
    A,
    /// Second player.
    B,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
        }
    }

    /// Single-character symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::A => 'A',
            Mark::B => 'B',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Single-character symbol for this square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => EMPTY_SYMBOL,
            Square::Occupied(mark) => mark.symbol(),
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            EMPTY_SYMBOL => Some(Square::Empty),
            'A' => Some(Square::Occupied(Mark::A)),
            'B' => Some(Square::Occupied(Mark::B)),
            _ => None,
        }
    }
}

/// Error returned when addressing a square outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("position {pos} is out of bounds (must be 0-8)")]
pub struct OutOfBounds {
    /// The rejected position.
    pub pos: usize,
}

/// Error returned when parsing a compact board string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of squares.
    #[display("board must have exactly 9 squares, got {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// Unrecognized square symbol.
    #[display("invalid square symbol {symbol:?} at position {pos}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Position of the offending character.
        pos: usize,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Displays as the compact 9-character encoding used on the wire,
/// e.g. `"----A----"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), OutOfBounds> {
        let slot = self.squares.get_mut(pos).ok_or(OutOfBounds { pos })?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Number of squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in &self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != BOARD_SIZE {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut board = Board::new();
        for (pos, symbol) in symbols.into_iter().enumerate() {
            board.squares[pos] = Square::from_symbol(symbol)
                .ok_or(BoardParseError::InvalidSymbol { symbol, pos })?;
        }
        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_encoding() {
        assert_eq!(Board::new().to_string(), "---------");
    }

    #[test]
    fn test_parse_roundtrips_mixed_board() {
        let board: Board = "B---A----".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Mark::B)));
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::A)));
        assert_eq!(board.to_string(), "B---A----");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "----".parse::<Board>(),
            Err(BoardParseError::WrongLength(4))
        );
        assert_eq!(
            "----X----".parse::<Board>(),
            Err(BoardParseError::InvalidSymbol { symbol: 'X', pos: 4 })
        );
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.set(9, Square::Occupied(Mark::A)),
            Err(OutOfBounds { pos: 9 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_render_grid() {
        let board: Board = "A---B----".parse().unwrap();
        assert_eq!(board.render(), "A|2|3\n-+-+-\n4|B|6\n-+-+-\n7|8|9");
    }
}
