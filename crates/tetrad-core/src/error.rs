//! Error types for grid parsing and board construction.

use std::fmt;

/// Errors that occur when parsing a text grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid does not have exactly 6 `/`-separated rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not describe exactly 7 cells.
    BadRowLength {
        /// Zero-based row index (0 = top).
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// A character other than `0`, `1` or `2` appeared in a row.
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed cells do not form a legal board.
    InvalidBoard {
        /// The underlying board error.
        source: BoardError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::WrongRowCount { found } => {
                write!(f, "expected 6 grid rows, found {found}")
            }
            GridError::BadRowLength { row, length } => {
                write!(f, "row {row} describes {length} cells, expected 7")
            }
            GridError::InvalidCellChar { character } => {
                write!(f, "invalid cell character: '{character}'")
            }
            GridError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for GridError {
    fn from(source: BoardError) -> Self {
        GridError::InvalidBoard { source }
    }
}

/// Errors from dropping pieces or building a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The column index is outside `0..7`.
    #[error("column {col} is out of range")]
    ColumnOutOfRange {
        /// The requested column.
        col: usize,
    },
    /// The column has no empty cell left.
    #[error("column {col} is full")]
    ColumnFull {
        /// The requested column.
        col: usize,
    },
    /// A grid value other than 0, 1 or 2.
    #[error("invalid cell value {value}")]
    InvalidCell {
        /// The offending value.
        value: u8,
    },
    /// An occupied cell sits above an empty one.
    #[error("piece at row {row}, column {col} is not supported")]
    FloatingPiece {
        /// Row of the unsupported piece.
        row: usize,
        /// Column of the unsupported piece.
        col: usize,
    },
    /// Piece counts no alternating game starting with player one can reach.
    #[error("unreachable piece counts: {one} for player one, {two} for player two")]
    PieceCount {
        one: usize,
        two: usize,
    },
}
