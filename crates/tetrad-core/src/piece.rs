//! Player pieces and board cells.

use std::fmt;
use std::ops::Not;

/// A player's piece: the first or second player.
///
/// The discriminants match the integer encoding used on the wire
/// (1 = first player, 2 = second player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    One = 1,
    Two = 2,
}

impl Piece {
    /// Total number of pieces.
    pub const COUNT: usize = 2;

    /// Both pieces in index order.
    pub const ALL: [Piece; 2] = [Piece::One, Piece::Two];

    /// Return the index (0 for One, 1 for Two).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Return the wire value (1 or 2).
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Parse a wire value.
    #[inline]
    pub const fn from_value(value: u8) -> Option<Piece> {
        match value {
            1 => Some(Piece::One),
            2 => Some(Piece::Two),
            _ => None,
        }
    }

    /// Return the opposing piece.
    #[inline]
    pub const fn flip(self) -> Piece {
        match self {
            Piece::One => Piece::Two,
            Piece::Two => Piece::One,
        }
    }
}

impl Not for Piece {
    type Output = Piece;

    #[inline]
    fn not(self) -> Piece {
        self.flip()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    One = 1,
    Two = 2,
}

impl Cell {
    /// Return the wire value (0, 1 or 2).
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Parse a wire value.
    #[inline]
    pub const fn from_value(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::One),
            2 => Some(Cell::Two),
            _ => None,
        }
    }

    /// The piece occupying this cell, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Piece::One),
            Cell::Two => Some(Piece::Two),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used by the text grid and pretty printer.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::One => '1',
            Cell::Two => '2',
        }
    }
}

impl From<Piece> for Cell {
    #[inline]
    fn from(piece: Piece) -> Cell {
        match piece {
            Piece::One => Cell::One,
            Piece::Two => Cell::Two,
        }
    }
}
