//! The game board: a 6×7 grid under gravity.

use std::fmt;

use crate::error::BoardError;
use crate::movelist::MoveList;
use crate::piece::{Cell, Piece};
use crate::windows::{RUN, WINDOWS, Window};

/// Number of rows. Row 0 is the top.
pub const ROWS: usize = 6;

/// Number of columns.
pub const COLS: usize = 7;

/// The center column.
pub const CENTER_COL: usize = COLS / 2;

/// Complete board state.
///
/// `Board` is a small `Copy` value; every move produces a new board and
/// never mutates the original. The gravity invariant (no empty cell below an
/// occupied one) holds for every board reachable through the public API.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Return the empty board.
    pub const fn new() -> Board {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from the integer grid (0 empty, 1 and 2 pieces, row 0 on top).
    ///
    /// Rejects unknown values and pieces floating above an empty cell.
    pub fn from_grid(grid: [[u8; COLS]; ROWS]) -> Result<Board, BoardError> {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = Cell::from_value(value).ok_or(BoardError::InvalidCell { value })?;
            }
        }
        let board = Board { cells };
        board.validate()?;
        Ok(board)
    }

    /// Return the integer grid representation of this board.
    pub fn to_grid(&self) -> [[u8; COLS]; ROWS] {
        let mut grid = [[0u8; COLS]; ROWS];
        for row in 0..ROWS {
            for col in 0..COLS {
                grid[row][col] = self.cells[row][col].value();
            }
        }
        grid
    }

    /// Check the gravity invariant.
    pub fn validate(&self) -> Result<(), BoardError> {
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if !self.cells[row][col].is_empty() && self.cells[row + 1][col].is_empty() {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }
        Ok(())
    }

    /// Check that the piece counts fit alternating play from the empty
    /// board: player one has as many pieces as player two, or one more.
    ///
    /// Not part of [`validate()`](Self::validate), since search positions
    /// are often set up with one side's pieces only.
    pub fn validate_counts(&self) -> Result<(), BoardError> {
        let one = self.count(Piece::One);
        let two = self.count(Piece::Two);
        if one == two || one == two + 1 {
            Ok(())
        } else {
            Err(BoardError::PieceCount { one, two })
        }
    }

    /// The cell at `(row, col)`. Panics if out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The four cells covered by `window`.
    #[inline]
    pub fn window(&self, window: &Window) -> [Cell; RUN] {
        window.cells.map(|(row, col)| self.cells[row][col])
    }

    /// The row a piece dropped into `col` would land on, or `None` if the
    /// column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Return `true` if `col` accepts another piece.
    #[inline]
    pub fn is_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_empty()
    }

    /// Drop `piece` into `col`, returning the resulting board.
    ///
    /// The piece settles on the lowest empty row. Dropping into a full or
    /// out-of-range column is an error; `self` is never modified.
    pub fn make_move(&self, col: usize, piece: Piece) -> Result<Board, BoardError> {
        if col >= COLS {
            return Err(BoardError::ColumnOutOfRange { col });
        }
        let row = self.landing_row(col).ok_or(BoardError::ColumnFull { col })?;
        let mut next = *self;
        next.cells[row][col] = Cell::from(piece);
        Ok(next)
    }

    /// Playable columns in left-to-right order.
    pub fn legal_columns(&self) -> MoveList {
        let mut moves = MoveList::new();
        for col in 0..COLS {
            if self.is_playable(col) {
                moves.push(col);
            }
        }
        moves
    }

    /// Return `true` if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Return `true` if `piece` has four in a row anywhere on the board.
    ///
    /// Every window of every orientation is considered.
    pub fn check_win(&self, piece: Piece) -> bool {
        let target = Cell::from(piece);
        WINDOWS
            .iter()
            .any(|w| self.window(w).iter().all(|&cell| cell == target))
    }

    /// The piece with four in a row, if any. Player one is reported first
    /// on the (unreachable) board where both have won.
    pub fn winner(&self) -> Option<Piece> {
        Piece::ALL.into_iter().find(|&piece| self.check_win(piece))
    }

    /// Return `true` if the game is over: a win for either side or a full board.
    pub fn is_terminal(&self) -> bool {
        self.check_win(Piece::One) || self.check_win(Piece::Two) || self.is_full()
    }

    /// Number of `piece` tokens on the board.
    pub fn count(&self, piece: Piece) -> usize {
        let target = Cell::from(piece);
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count()
    }

    /// Total number of pieces on the board.
    pub fn occupied(&self) -> usize {
        self.count(Piece::One) + self.count(Piece::Two)
    }

    /// The side to move, inferred from piece counts. Player one moves first.
    pub fn side_to_move(&self) -> Piece {
        if self.count(Piece::One) > self.count(Piece::Two) {
            Piece::Two
        } else {
            Piece::One
        }
    }

    /// The board rotated by 180 degrees.
    ///
    /// The result generally breaks gravity; it is meant for symmetry checks
    /// on the win detector, which does not depend on gravity.
    pub fn rotate_180(&self) -> Board {
        let mut rotated = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                rotated.cells[ROWS - 1 - row][COLS - 1 - col] = self.cells[row][col];
            }
        }
        rotated
    }

    /// The board mirrored left to right. Gravity is preserved.
    pub fn mirror(&self) -> Board {
        let mut mirrored = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                mirrored.cells[row][COLS - 1 - col] = self.cells[row][col];
            }
        }
        mirrored
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a 6×7 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..ROWS {
            for col in 0..COLS {
                let c = match board.get(row, col) {
                    Cell::Empty => '.',
                    Cell::One => 'X',
                    Cell::Two => 'O',
                };
                if col < COLS - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "0 1 2 3 4 5 6")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cols: &[usize]) -> Board {
        let mut board = Board::new();
        for &col in cols {
            board = board.make_move(col, board.side_to_move()).unwrap();
        }
        board
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(!board.is_terminal());
    }

    #[test]
    fn make_move_stacks_from_bottom() {
        let board = Board::new().make_move(3, Piece::One).unwrap();
        assert_eq!(board.get(5, 3), Cell::One);
        let board = board.make_move(3, Piece::Two).unwrap();
        assert_eq!(board.get(4, 3), Cell::Two);
        assert_eq!(board.get(5, 3), Cell::One);
    }

    #[test]
    fn make_move_leaves_source_untouched() {
        let board = Board::new();
        let child = board.make_move(0, Piece::One).unwrap();
        assert_eq!(board, Board::new());
        assert_ne!(board, child);
    }

    #[test]
    fn full_column_is_rejected() {
        let board = play(&[0, 0, 0, 0, 0, 0]);
        assert!(!board.is_playable(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(
            board.make_move(0, Piece::One),
            Err(BoardError::ColumnFull { col: 0 })
        );
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        assert_eq!(
            Board::new().make_move(7, Piece::One),
            Err(BoardError::ColumnOutOfRange { col: 7 })
        );
        assert!(!Board::new().is_playable(9));
    }

    #[test]
    fn legal_columns_skip_full() {
        let board = play(&[2, 2, 2, 2, 2, 2]);
        assert_eq!(board.legal_columns().as_slice(), &[0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board = board.make_move(col, Piece::One).unwrap();
        }
        assert!(board.check_win(Piece::One));
        assert!(!board.check_win(Piece::Two));
        assert_eq!(board.winner(), Some(Piece::One));
        assert!(board.is_terminal());
    }

    #[test]
    fn vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board = board.make_move(6, Piece::Two).unwrap();
        }
        assert!(board.check_win(Piece::Two));
    }

    #[test]
    fn diagonal_up_win() {
        // Player one builds a `/` diagonal from (5,0) to (2,3).
        let board = play(&[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);
        assert!(board.check_win(Piece::One));
    }

    #[test]
    fn diagonal_down_win() {
        let board = play(&[6, 5, 5, 4, 4, 3, 4, 3, 3, 0, 3]);
        assert!(board.check_win(Piece::One));
    }

    #[test]
    fn three_is_not_a_win() {
        let board = play(&[0, 0, 1, 1, 2, 2]);
        assert!(!board.check_win(Piece::One));
        assert!(!board.check_win(Piece::Two));
    }

    #[test]
    fn side_to_move_alternates() {
        assert_eq!(Board::new().side_to_move(), Piece::One);
        assert_eq!(play(&[3]).side_to_move(), Piece::Two);
        assert_eq!(play(&[3, 3]).side_to_move(), Piece::One);
    }

    #[test]
    fn validate_counts_follows_turn_order() {
        assert!(Board::new().validate_counts().is_ok());
        assert!(play(&[3]).validate_counts().is_ok());
        assert!(play(&[3, 4]).validate_counts().is_ok());

        let mut lopsided = Board::new();
        for col in 0..3 {
            lopsided = lopsided.make_move(col, Piece::Two).unwrap();
        }
        assert_eq!(
            lopsided.validate_counts(),
            Err(BoardError::PieceCount { one: 0, two: 3 })
        );

        let ahead = play(&[3]).make_move(3, Piece::One).unwrap();
        assert_eq!(
            ahead.validate_counts(),
            Err(BoardError::PieceCount { one: 2, two: 0 })
        );
    }

    #[test]
    fn from_grid_rejects_floating_piece() {
        let mut grid = [[0u8; COLS]; ROWS];
        grid[3][2] = 1;
        assert_eq!(
            Board::from_grid(grid),
            Err(BoardError::FloatingPiece { row: 3, col: 2 })
        );
    }

    #[test]
    fn from_grid_rejects_bad_value() {
        let mut grid = [[0u8; COLS]; ROWS];
        grid[5][0] = 3;
        assert_eq!(Board::from_grid(grid), Err(BoardError::InvalidCell { value: 3 }));
    }

    #[test]
    fn grid_roundtrip() {
        let board = play(&[3, 3, 4, 2, 2]);
        assert_eq!(Board::from_grid(board.to_grid()).unwrap(), board);
    }

    #[test]
    fn rotation_preserves_wins() {
        let board = play(&[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);
        let rotated = board.rotate_180();
        assert!(rotated.check_win(Piece::One));
        assert_eq!(rotated.rotate_180(), board);
    }

    #[test]
    fn mirror_keeps_gravity() {
        let board = play(&[0, 0, 1, 5]);
        board.mirror().validate().unwrap();
        assert_eq!(board.mirror().get(5, 6), Cell::One);
    }

    #[test]
    fn pretty_print() {
        let board = play(&[3, 4]);
        let output = format!("{}", board.pretty());
        assert!(output.contains(". . . X O . ."));
        assert!(output.ends_with("0 1 2 3 4 5 6"));
    }
}
