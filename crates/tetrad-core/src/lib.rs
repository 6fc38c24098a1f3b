//! Core game types: board representation, win detection, and legal columns.

mod board;
mod error;
mod grid;
mod movelist;
mod piece;
mod windows;

pub use board::{Board, CENTER_COL, COLS, PrettyBoard, ROWS};
pub use error::{BoardError, GridError};
pub use grid::EMPTY_GRID;
pub use movelist::MoveList;
pub use piece::{Cell, Piece};
pub use windows::{Orientation, RUN, WINDOW_COUNT, WINDOWS, Window, windows_of};
