//! Search and evaluation for tetrad.

pub mod compute;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

pub use compute::{
    Algorithm, DEFAULT_DEPTH, DEFAULT_TIME_LIMIT, compute_move, compute_move_reporting,
    compute_move_with,
};
pub use config::{EngineConfig, MAX_DEPTH};
pub use error::EngineError;
pub use eval::evaluate_position;
pub use game::{GameRecord, Outcome, play_game};
pub use search::control::SearchControl;
pub use search::ordering::{ordered_moves, valid_moves, winning_column};
pub use search::{
    DRAW, LOSS, SearchResult, WIN, iterative_deepening, search_alphabeta, search_minimax,
};
