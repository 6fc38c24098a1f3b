//! Move ordering: center-first columns with a forced-block override.

use tetrad_core::{Board, CENTER_COL, MoveList, Piece};

/// Playable columns ordered by distance from the center column.
///
/// The sort is stable, so columns at equal distance keep their
/// left-to-right order. On an empty board this yields `3 2 4 1 5 0 6`.
pub fn ordered_moves(board: &Board) -> MoveList {
    let mut moves = board.legal_columns();
    moves
        .as_mut_slice()
        .sort_by_key(|&col| col.abs_diff(CENTER_COL));
    moves
}

/// The first column (left to right) where `piece` would complete four.
pub fn winning_column(board: &Board, piece: Piece) -> Option<usize> {
    board.legal_columns().iter().find(|&col| {
        board
            .make_move(col, piece)
            .is_ok_and(|next| next.check_win(piece))
    })
}

/// Candidate moves for `mover`, in search order.
///
/// If the opponent of `mover` could win immediately by playing some column,
/// only that column is returned. Columns are inspected left to right and
/// the first threat wins: a position with two separate opponent threats
/// still reports a single block. Otherwise falls back to [`ordered_moves`].
///
/// Empty only when the board is full.
pub fn valid_moves(board: &Board, mover: Piece) -> MoveList {
    match winning_column(board, !mover) {
        Some(col) => MoveList::single(col),
        None => ordered_moves(board),
    }
}
