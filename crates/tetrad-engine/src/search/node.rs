//! Search nodes.

use tetrad_core::{Board, BoardError, Piece};

/// One position in the search tree.
///
/// Nodes are plain values: a child owns its own copy of the board, so no
/// two branches ever share mutable state, and nothing outlives the search
/// call that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Board snapshot at this node.
    pub board: Board,
    /// Remaining depth in plies.
    pub depth: u8,
    /// Piece that moves next.
    pub to_move: Piece,
    /// Piece that produced this position, `None` at the root.
    pub last_mover: Option<Piece>,
    /// Column that produced this position, `None` at the root.
    pub last_move: Option<usize>,
    /// Plies played since the root.
    pub ply: u32,
}

impl Node {
    /// Root node for a search of `depth` plies with `to_move` on move.
    pub fn root(board: Board, depth: u8, to_move: Piece) -> Node {
        Node {
            board,
            depth,
            to_move,
            last_mover: None,
            last_move: None,
            ply: 0,
        }
    }

    /// The node reached by the side to move dropping into `col`.
    pub fn child(&self, col: usize) -> Result<Node, BoardError> {
        let board = self.board.make_move(col, self.to_move)?;
        Ok(Node {
            board,
            depth: self.depth.saturating_sub(1),
            to_move: !self.to_move,
            last_mover: Some(self.to_move),
            last_move: Some(col),
            ply: self.ply + 1,
        })
    }
}
