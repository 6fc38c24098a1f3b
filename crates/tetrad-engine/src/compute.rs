//! Top-level move selection.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tetrad_core::{Board, Piece};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::search::control::SearchControl;
use crate::search::ordering::valid_moves;
use crate::search::{SearchResult, iterative_deepening, search_alphabeta, search_minimax};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// Default wall-clock budget for iterative deepening.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(2500);

/// Search algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
    IterativeDeepening,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Minimax,
        Algorithm::AlphaBeta,
        Algorithm::IterativeDeepening,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
            Algorithm::IterativeDeepening => "iterative",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Algorithm::AlphaBeta),
            "iterative" | "id" => Ok(Algorithm::IterativeDeepening),
            _ => Err(EngineError::InvalidAlgorithm { name: s.to_string() }),
        }
    }
}

/// Run the configured search from `board` with `piece` to move.
///
/// Fixed-depth searches report through `on_iter` once, when they finish;
/// iterative deepening reports after every completed depth. The clock for
/// the time limit starts on entry.
pub fn search<F>(
    board: &Board,
    piece: Piece,
    config: &EngineConfig,
    mut on_iter: F,
) -> Result<SearchResult, EngineError>
where
    F: FnMut(&SearchResult),
{
    let result = match config.algorithm {
        Algorithm::Minimax => search_minimax(board, config.depth, piece)?,
        Algorithm::AlphaBeta => search_alphabeta(board, config.depth, piece)?,
        Algorithm::IterativeDeepening => {
            let control = SearchControl::from_limit(config.time_limit);
            return iterative_deepening(board, piece, config.depth, &control, on_iter);
        }
    };
    on_iter(&result);
    Ok(result)
}

/// Pick a column for `piece` to play, or `None` if the game is over.
///
/// Never fails: a search error, or a search that comes back without one of
/// the valid moves, is logged and replaced by the first entry of
/// [`valid_moves`]. `time_limit` only applies to iterative deepening.
pub fn compute_move(
    board: &Board,
    algorithm: Algorithm,
    piece: Piece,
    depth: u8,
    time_limit: Option<Duration>,
) -> Option<usize> {
    let config = EngineConfig {
        algorithm,
        depth,
        time_limit,
    };
    compute_move_with(board, &config, piece)
}

/// [`compute_move`] taking its settings from `config`.
pub fn compute_move_with(board: &Board, config: &EngineConfig, piece: Piece) -> Option<usize> {
    compute_move_reporting(board, config, piece, |_| {})
}

/// [`compute_move_with`] that also forwards search progress to `on_iter`.
pub fn compute_move_reporting<F>(
    board: &Board,
    config: &EngineConfig,
    piece: Piece,
    on_iter: F,
) -> Option<usize>
where
    F: FnMut(&SearchResult),
{
    if board.is_terminal() {
        return None;
    }
    let candidates = valid_moves(board, piece);
    let default = candidates.first()?;

    match search(board, piece, config, on_iter) {
        Ok(result) => match result.best_move {
            Some(col) if candidates.contains(col) => {
                debug!(
                    algorithm = %config.algorithm,
                    depth = result.depth,
                    score = result.score,
                    col,
                    "move chosen"
                );
                Some(col)
            }
            other => {
                warn!(algorithm = %config.algorithm, best_move = ?other, default, "search gave no valid move, using default");
                Some(default)
            }
        },
        Err(e) => {
            warn!(error = %e, algorithm = %config.algorithm, default, "search failed, using default");
            Some(default)
        }
    }
}
