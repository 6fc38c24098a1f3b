//! Plain fixed-depth minimax.
//!
//! Explores every legal line to the requested depth with no pruning and no
//! memoization. Slow, but it is the reference the pruned search is checked
//! against.

use tetrad_core::Piece;

use crate::error::EngineError;
use crate::search::node::Node;
use crate::search::ordering::valid_moves;
use crate::search::{SearchContext, SearchResult, leaf_score};

/// Run minimax from `node`, scoring for `root_piece`.
///
/// Plies where `root_piece` is to move maximize, the others minimize.
/// The first candidate seeds the best move and only a strictly better score
/// replaces it, so ties resolve to the earliest move in search order.
pub fn minimax(node: &Node, root_piece: Piece) -> Result<SearchResult, EngineError> {
    let mut ctx = SearchContext::default();
    let (best_move, score) = minimax_node(node, root_piece, &mut ctx)?;
    Ok(SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
        depth: node.depth,
    })
}

fn minimax_node(
    node: &Node,
    root_piece: Piece,
    ctx: &mut SearchContext,
) -> Result<(Option<usize>, i32), EngineError> {
    ctx.nodes += 1;

    if let Some(score) = leaf_score(node, root_piece) {
        return Ok((None, score));
    }

    let maximizing = node.to_move == root_piece;
    let mut best: Option<(usize, i32)> = None;

    for col in &valid_moves(&node.board, node.to_move) {
        let child = node.child(col)?;
        let (_, score) = minimax_node(&child, root_piece, ctx)?;

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((col, score));
        }
    }

    let (col, score) = best.ok_or(EngineError::NoMove)?;
    Ok((Some(col), score))
}
