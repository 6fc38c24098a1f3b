//! Static evaluation used at search cutoffs.
//!
//! Scores are always from the point of view of the piece passed in
//! (positive = good for that piece). The evaluator knows nothing about whose
//! turn it is.

pub mod window;

use tetrad_core::{Board, CENTER_COL, Cell, Piece, ROWS, WINDOWS};

pub use window::evaluate_window;

/// Bonus per own piece in the center column.
pub const CENTER_BONUS: i32 = 3;

/// Evaluate `board` for `piece`.
///
/// Sum of [`CENTER_BONUS`] for each `piece` token in the center column and
/// the [`evaluate_window`] score of every window on the board.
pub fn evaluate_position(board: &Board, piece: Piece) -> i32 {
    let own = Cell::from(piece);
    let opponent = !piece;

    let center = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == own)
        .count() as i32
        * CENTER_BONUS;

    let windows: i32 = WINDOWS
        .iter()
        .map(|w| evaluate_window(&board.window(w), piece, opponent))
        .sum();

    center + windows
}
