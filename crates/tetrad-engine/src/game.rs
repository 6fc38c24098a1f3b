//! Engine-versus-engine games.

use std::fmt;
use std::time::{Duration, Instant};

use tetrad_core::{Board, Piece};
use tracing::{debug, info};

use crate::compute::compute_move_with;
use crate::config::EngineConfig;
use crate::error::EngineError;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Piece),
    Draw,
}

impl Outcome {
    /// Outcome of a terminal board, `None` while the game is still open.
    pub fn of(board: &Board) -> Option<Outcome> {
        match board.winner() {
            Some(piece) => Some(Outcome::Win(piece)),
            None if board.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(piece) => write!(f, "winner {piece}"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// A game played to the end.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Columns played, in order, starting with the side to move at the start.
    pub moves: Vec<usize>,
    pub outcome: Outcome,
    pub final_board: Board,
    /// Wall-clock time for the whole game.
    pub elapsed: Duration,
}

impl GameRecord {
    pub fn total_moves(&self) -> usize {
        self.moves.len()
    }
}

/// Play `start` out to the end, each side using its own config.
///
/// `configs` is indexed by [`Piece::index`]. The first mover is
/// [`Board::side_to_move`] of `start`.
pub fn play_game(start: Board, configs: [EngineConfig; Piece::COUNT]) -> Result<GameRecord, EngineError> {
    for config in &configs {
        config.validate()?;
    }

    let timer = Instant::now();
    let mut board = start;
    let mut side = start.side_to_move();
    let mut moves = Vec::new();

    let outcome = loop {
        if let Some(outcome) = Outcome::of(&board) {
            break outcome;
        }
        let config = &configs[side.index()];
        let col = compute_move_with(&board, config, side).ok_or(EngineError::NoMove)?;
        board = board.make_move(col, side)?;
        debug!(ply = moves.len(), %side, col, "self-play move");
        moves.push(col);
        side = !side;
    };

    let elapsed = timer.elapsed();
    info!(%outcome, moves = moves.len(), ?elapsed, "self-play game finished");
    Ok(GameRecord {
        moves,
        outcome,
        final_board: board,
        elapsed,
    })
}
