//! Engine errors.

use tetrad_core::BoardError;

/// Errors that can occur while searching or configuring the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A search transition produced an illegal drop.
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    /// A non-terminal position yielded no candidate move.
    #[error("no move available in a non-terminal position")]
    NoMove,

    /// The algorithm name is not recognized.
    #[error("unknown algorithm: {name}")]
    InvalidAlgorithm {
        /// The name that failed to parse.
        name: String,
    },

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
