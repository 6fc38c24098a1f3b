//! Alpha-beta pruned minimax.

use tetrad_core::Piece;

use crate::error::EngineError;
use crate::search::node::Node;
use crate::search::ordering::valid_moves;
use crate::search::{SearchContext, SearchResult, leaf_score};

/// Alpha-beta search from `node` inside the window `(alpha, beta)`, scoring
/// for `root_piece`.
///
/// Called with the full window `(LOSS, WIN)` this returns exactly the move
/// and score [`minimax`](crate::search::minimax::minimax) would, while
/// visiting at most as many nodes. Tie-breaking is the same: first
/// candidate seeds, only strict improvements replace it.
pub fn alphabeta(
    node: &Node,
    alpha: i32,
    beta: i32,
    root_piece: Piece,
) -> Result<SearchResult, EngineError> {
    let mut ctx = SearchContext::default();
    let (best_move, score) = alphabeta_node(node, alpha, beta, root_piece, &mut ctx)?;
    Ok(SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
        depth: node.depth,
    })
}

fn alphabeta_node(
    node: &Node,
    mut alpha: i32,
    mut beta: i32,
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
        let (_, score) = alphabeta_node(&child, alpha, beta, root_piece, ctx)?;

        if maximizing {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((col, score));
                alpha = alpha.max(score);
            }
            if best.is_some_and(|(_, best_score)| best_score >= beta) {
                break;
            }
        } else {
            if best.is_none_or(|(_, best_score)| score < best_score) {
                best = Some((col, score));
                beta = beta.min(score);
            }
            if best.is_some_and(|(_, best_score)| best_score <= alpha) {
                break;
            }
        }
    }

    let (col, score) = best.ok_or(EngineError::NoMove)?;
    Ok((Some(col), score))
}
