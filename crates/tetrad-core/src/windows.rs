//! Precomputed four-cell windows.
//!
//! Every straight run of four cells on the 6×7 board, tagged with its
//! orientation. The table is built at compile time and shared by win
//! detection and evaluation.

use crate::board::{COLS, ROWS};

/// Length of a winning run.
pub const RUN: usize = 4;

/// Number of windows on a 6×7 board: 24 horizontal, 21 vertical, 12 per diagonal.
pub const WINDOW_COUNT: usize = 69;

/// Direction a window runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right (`\`).
    DiagonalDown,
    /// Bottom-left to top-right (`/`).
    DiagonalUp,
}

impl Orientation {
    /// All orientations in table order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];
}

/// Four `(row, col)` coordinates forming one straight run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub orientation: Orientation,
    pub cells: [(usize, usize); RUN],
}

impl Window {
    /// Build the window starting at `(row, col)` in the given orientation.
    ///
    /// For [`Orientation::DiagonalUp`] the start is the bottom-left cell.
    const fn new(orientation: Orientation, row: usize, col: usize) -> Window {
        let mut cells = [(0, 0); RUN];
        let mut i = 0;
        while i < RUN {
            cells[i] = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
                Orientation::DiagonalDown => (row + i, col + i),
                Orientation::DiagonalUp => (row - i, col + i),
            };
            i += 1;
        }
        Window { orientation, cells }
    }
}

/// Every window on the board, grouped by orientation in [`Orientation::ALL`] order.
pub static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut out = [Window::new(Orientation::Horizontal, 0, 0); WINDOW_COUNT];
    let mut n = 0;

    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col + RUN <= COLS {
            out[n] = Window::new(Orientation::Horizontal, row, col);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    let mut col = 0;
    while col < COLS {
        let mut row = 0;
        while row + RUN <= ROWS {
            out[n] = Window::new(Orientation::Vertical, row, col);
            n += 1;
            row += 1;
        }
        col += 1;
    }

    let mut row = 0;
    while row + RUN <= ROWS {
        let mut col = 0;
        while col + RUN <= COLS {
            out[n] = Window::new(Orientation::DiagonalDown, row, col);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    let mut row = RUN - 1;
    while row < ROWS {
        let mut col = 0;
        while col + RUN <= COLS {
            out[n] = Window::new(Orientation::DiagonalUp, row, col);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    assert!(n == WINDOW_COUNT);
    out
}

/// Iterate over the windows of a single orientation.
pub fn windows_of(orientation: Orientation) -> impl Iterator<Item = &'static Window> {
    WINDOWS.iter().filter(move |w| w.orientation == orientation)
}
