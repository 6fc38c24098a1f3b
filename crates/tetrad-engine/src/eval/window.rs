//! Scoring of a single four-cell window.

use tetrad_core::{Cell, Piece, RUN};

/// Opponent holds three cells and the fourth is open.
pub const OPPONENT_THREE: i32 = -100;

/// Own three with the fourth open.
pub const OWN_THREE: i32 = 50;

/// Own two with both remaining cells open.
pub const OWN_TWO: i32 = 10;

/// Score one window from `piece`'s point of view.
///
/// An open opponent three dominates: it is reported as [`OPPONENT_THREE`]
/// regardless of anything else. Mixed windows and sparser patterns score 0.
pub fn evaluate_window(window: &[Cell; RUN], piece: Piece, opponent: Piece) -> i32 {
    let own_cell = Cell::from(piece);
    let opp_cell = Cell::from(opponent);

    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for &cell in window {
        if cell == own_cell {
            own += 1;
        } else if cell == opp_cell {
            opp += 1;
        } else {
            empty += 1;
        }
    }

    if opp == 3 && empty == 1 {
        OPPONENT_THREE
    } else if own == 3 && empty == 1 {
        OWN_THREE
    } else if own == 2 && empty == 2 {
        OWN_TWO
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::One;
    const O: Cell = Cell::Two;

    fn score(window: [Cell; RUN]) -> i32 {
        evaluate_window(&window, Piece::One, Piece::Two)
    }

    #[test]
    fn opponent_three_is_urgent() {
        assert_eq!(score([O, O, E, O]), OPPONENT_THREE);
    }

    #[test]
    fn own_three_open() {
        assert_eq!(score([X, X, X, E]), OWN_THREE);
        assert_eq!(score([E, X, X, X]), OWN_THREE);
    }

    #[test]
    fn own_two_open() {
        assert_eq!(score([X, E, X, E]), OWN_TWO);
    }

    #[test]
    fn mixed_and_sparse_windows_score_zero() {
        assert_eq!(score([X, X, O, E]), 0);
        assert_eq!(score([X, E, E, E]), 0);
        assert_eq!(score([E, E, E, E]), 0);
        assert_eq!(score([O, O, E, E]), 0);
        assert_eq!(score([X, X, X, O]), 0);
    }

    #[test]
    fn perspective_swaps() {
        let window = [O, O, O, E];
        assert_eq!(evaluate_window(&window, Piece::Two, Piece::One), OWN_THREE);
        assert_eq!(evaluate_window(&window, Piece::One, Piece::Two), OPPONENT_THREE);
    }
}
