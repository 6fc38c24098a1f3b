//! Text grid parsing and serialization for [`Board`].
//!
//! Six rows from top to bottom, separated by `/`, each row seven characters
//! drawn from `0` (empty), `1` and `2`.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, COLS, ROWS};
use crate::error::GridError;

/// The text grid of the empty board.
pub const EMPTY_GRID: &str = "0000000/0000000/0000000/0000000/0000000/0000000";

impl FromStr for Board {
    type Err = GridError;

    fn from_str(text: &str) -> Result<Board, GridError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != ROWS {
            return Err(GridError::WrongRowCount { found: rows.len() });
        }

        let mut grid = [[0u8; COLS]; ROWS];
        for (row, row_str) in rows.iter().enumerate() {
            let length = row_str.chars().count();
            if length != COLS {
                return Err(GridError::BadRowLength { row, length });
            }
            for (col, c) in row_str.chars().enumerate() {
                grid[row][col] = match c {
                    '0' | '.' => 0,
                    '1' => 1,
                    '2' => 2,
                    _ => return Err(GridError::InvalidCellChar { character: c }),
                };
            }
        }

        Ok(Board::from_grid(grid)?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0..COLS {
                write!(f, "{}", self.get(row, col).to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::piece::{Cell, Piece};

    #[test]
    fn parse_empty() {
        let board: Board = EMPTY_GRID.parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn display_roundtrip() {
        let board = Board::new()
            .make_move(3, Piece::One)
            .unwrap()
            .make_move(3, Piece::Two)
            .unwrap();
        let text = board.to_string();
        assert_eq!(text, "0000000/0000000/0000000/0000000/0002000/0001000");
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn dots_are_empty() {
        let board: Board = "......./......./......./......./......./1112..."
            .parse()
            .unwrap();
        assert_eq!(board.get(5, 3), Cell::Two);
        assert_eq!(board.get(5, 4), Cell::Empty);
    }

    #[test]
    fn wrong_row_count() {
        let err = "0000000/0000000".parse::<Board>().unwrap_err();
        assert_eq!(err, GridError::WrongRowCount { found: 2 });
    }

    #[test]
    fn bad_row_length() {
        let err = "0000000/0000000/0000000/000000/0000000/0000000"
            .parse::<Board>()
            .unwrap_err();
        assert_eq!(err, GridError::BadRowLength { row: 3, length: 6 });
    }

    #[test]
    fn invalid_character() {
        let err = "0000000/0000000/0000000/0000000/0000000/000x000"
            .parse::<Board>()
            .unwrap_err();
        assert_eq!(err, GridError::InvalidCellChar { character: 'x' });
    }

    #[test]
    fn floating_piece_rejected() {
        let err = "0000000/0000000/0001000/0000000/0000000/0000000"
            .parse::<Board>()
            .unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidBoard {
                source: BoardError::FloatingPiece { row: 2, col: 3 }
            }
        );
    }
}
