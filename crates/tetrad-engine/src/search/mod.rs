//! Search algorithms and move ordering.

pub mod alphabeta;
pub mod control;
pub mod minimax;
pub mod node;
pub mod ordering;

use tetrad_core::{Board, Piece};
use tracing::{debug, trace};

use crate::error::EngineError;
use crate::eval::evaluate_position;

use alphabeta::alphabeta;
use control::SearchControl;
use minimax::minimax;
use node::Node;
use ordering::ordered_moves;

/// Score of a position the root piece has won. Stands in for +∞.
pub const WIN: i32 = 1_000_000;

/// Score of a position the root piece has lost. Stands in for −∞.
pub const LOSS: i32 = -WIN;

/// Score of a full board with no winner.
pub const DRAW: i32 = 0;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move at the root, `None` if the root was already a leaf.
    pub best_move: Option<usize>,
    /// Score from the root piece's perspective.
    pub score: i32,
    /// Total nodes visited.
    pub nodes: u64,
    /// Depth the result was obtained at.
    pub depth: u8,
}

/// Per-search counters threaded through the recursion.
#[derive(Debug, Default)]
pub(crate) struct SearchContext {
    pub nodes: u64,
}

/// Score `node` if it is a leaf: a decided game, a full board, or no depth left.
///
/// Decided games score [`WIN`] / [`LOSS`] for `root_piece`, a full board
/// scores [`DRAW`], and an undecided node at depth 0 gets the static
/// evaluation. Returns `None` when the node must be expanded.
///
/// Below the root only the last mover is checked for a completed line, since
/// search never expands a decided node.
pub(crate) fn leaf_score(node: &Node, root_piece: Piece) -> Option<i32> {
    let board = &node.board;
    let winner = match node.last_mover {
        Some(mover) => board.check_win(mover).then_some(mover),
        None if board.check_win(root_piece) => Some(root_piece),
        None => board.check_win(!root_piece).then_some(!root_piece),
    };

    if let Some(winner) = winner {
        trace!(ply = node.ply, last_move = ?node.last_move, %winner, "decided leaf");
        return Some(if winner == root_piece { WIN } else { LOSS });
    }
    if board.is_full() {
        Some(DRAW)
    } else if node.depth == 0 {
        Some(evaluate_position(board, root_piece))
    } else {
        None
    }
}

/// Fixed-depth minimax from `board` with `piece` to move.
pub fn search_minimax(board: &Board, depth: u8, piece: Piece) -> Result<SearchResult, EngineError> {
    trace!(depth, %piece, "minimax");
    minimax(&Node::root(*board, depth, piece), piece)
}

/// Fixed-depth alpha-beta from `board` with `piece` to move, full window.
pub fn search_alphabeta(board: &Board, depth: u8, piece: Piece) -> Result<SearchResult, EngineError> {
    trace!(depth, %piece, "alpha-beta");
    alphabeta(&Node::root(*board, depth, piece), LOSS, WIN, piece)
}

/// Result used when no depth completed: the center-most legal column.
fn fallback_result(board: &Board, piece: Piece, nodes: u64) -> SearchResult {
    SearchResult {
        best_move: ordered_moves(board).first(),
        score: evaluate_position(board, piece),
        nodes,
        depth: 0,
    }
}

/// Iterative-deepening alpha-beta up to `max_depth`.
///
/// Depth 1 always runs. Before each further depth the control is consulted
/// and the loop stops once its soft limit has passed; a depth that has
/// started always completes. The returned result is the one from the
/// deepest completed depth, never the best score seen across depths, since
/// shallow searches can be over-optimistic. A completed depth scoring
/// [`WIN`] ends the search immediately.
///
/// With `max_depth == 0`, or if no completed depth produced a move, the
/// result falls back to the first column of [`ordered_moves`] at depth 0.
///
/// Calls `on_iter` after each completed depth.
pub fn iterative_deepening<F>(
    board: &Board,
    piece: Piece,
    max_depth: u8,
    control: &SearchControl,
    mut on_iter: F,
) -> Result<SearchResult, EngineError>
where
    F: FnMut(&SearchResult),
{
    let mut completed: Option<SearchResult> = None;
    let mut total_nodes = 0;

    for depth in 1..=max_depth {
        if depth > 1 && control.should_stop_iterating() {
            debug!(depth, elapsed = ?control.elapsed(), "time budget spent, not starting depth");
            break;
        }

        let mut result = search_alphabeta(board, depth, piece)?;
        total_nodes += result.nodes;
        result.nodes = total_nodes;

        if result.best_move.is_none() {
            // Root is already decided; deeper searches will not change that.
            break;
        }

        debug!(
            depth,
            score = result.score,
            nodes = result.nodes,
            best_move = ?result.best_move,
            "depth completed"
        );
        on_iter(&result);
        completed = Some(result);

        if result.score == WIN {
            break;
        }
    }

    Ok(completed.unwrap_or_else(|| fallback_result(board, piece, total_nodes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn id_infinite(board: &Board, piece: Piece, max_depth: u8) -> SearchResult {
        iterative_deepening(board, piece, max_depth, &SearchControl::new_infinite(), |_| {}).unwrap()
    }

    #[test]
    fn reports_every_depth() {
        let mut depths = Vec::new();
        iterative_deepening(
            &Board::new(),
            Piece::One,
            4,
            &SearchControl::new_infinite(),
            |r| depths.push(r.depth),
        )
        .unwrap();
        assert_eq!(depths, vec![1, 2, 3, 4]);
    }

    #[test]
    fn deepest_depth_is_authoritative() {
        // Depth 3 scores 16 on the empty board, depth 4 only 6: the
        // returned score must be the depth-4 one.
        let result = id_infinite(&Board::new(), Piece::One, 4);
        assert_eq!(result.depth, 4);
        assert_eq!(result.score, 6);
        assert_eq!(result.best_move, Some(3));
    }

    #[test]
    fn matches_alphabeta_at_max_depth() {
        let board = Board::new()
            .make_move(3, Piece::One)
            .unwrap()
            .make_move(2, Piece::Two)
            .unwrap();
        for depth in 1..=4 {
            let id = id_infinite(&board, Piece::One, depth);
            let ab = search_alphabeta(&board, depth, Piece::One).unwrap();
            assert_eq!((id.best_move, id.score), (ab.best_move, ab.score), "depth {depth}");
        }
    }

    #[test]
    fn proven_win_stops_early() {
        let mut board = Board::new();
        for col in 0..3 {
            board = board.make_move(col, Piece::One).unwrap();
        }
        let mut depths = Vec::new();
        let result = iterative_deepening(
            &board,
            Piece::One,
            6,
            &SearchControl::new_infinite(),
            |r| depths.push(r.depth),
        )
        .unwrap();
        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.score, WIN);
        assert_eq!(depths, vec![1]);
    }

    #[test]
    fn zero_depth_falls_back_to_center() {
        let result = id_infinite(&Board::new(), Piece::One, 0);
        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.depth, 0);
    }

    #[test]
    fn exhausted_budget_still_completes_depth_one() {
        let control = SearchControl::new_timed(Duration::ZERO);
        let result = iterative_deepening(&Board::new(), Piece::One, 8, &control, |_| {}).unwrap();
        assert_eq!(result.depth, 1);
        assert_eq!(result.best_move, Some(3));
    }

    #[test]
    fn decided_root_falls_back() {
        let mut board = Board::new();
        for col in 0..4 {
            board = board.make_move(col, Piece::Two).unwrap();
        }
        let result = id_infinite(&board, Piece::One, 3);
        assert_eq!(result.depth, 0);
        assert_eq!(result.best_move, Some(3));
    }

    #[test]
    fn leaf_scores() {
        let mut board = Board::new();
        for col in 0..4 {
            board = board.make_move(col, Piece::Two).unwrap();
        }
        let node = Node::root(board, 3, Piece::One);
        assert_eq!(leaf_score(&node, Piece::One), Some(LOSS));
        assert_eq!(leaf_score(&node, Piece::Two), Some(WIN));

        let open = Node::root(Board::new(), 2, Piece::One);
        assert_eq!(leaf_score(&open, Piece::One), None);
        let cutoff = Node::root(Board::new(), 0, Piece::One);
        assert_eq!(leaf_score(&cutoff, Piece::One), Some(0));
    }

    #[test]
    fn winning_child_is_decided_for_last_mover() {
        let mut board = Board::new();
        for col in 0..3 {
            board = board.make_move(col, Piece::Two).unwrap();
        }
        let root = Node::root(board, 3, Piece::Two);
        assert_eq!(leaf_score(&root, Piece::Two), None);

        let won = root.child(3).unwrap();
        assert_eq!(won.last_mover, Some(Piece::Two));
        assert_eq!(leaf_score(&won, Piece::Two), Some(WIN));
        assert_eq!(leaf_score(&won, Piece::One), Some(LOSS));

        let blocked = root.child(4).unwrap();
        assert_eq!(leaf_score(&blocked, Piece::Two), None);
    }

    #[test]
    fn full_board_is_a_draw() {
        let board: Board = "1212121/1212121/2121212/2121212/1212121/1212121"
            .parse()
            .unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        let result = search_minimax(&board, 4, Piece::One).unwrap();
        assert_eq!(result.score, DRAW);
        assert_eq!(result.best_move, None);
    }
}
