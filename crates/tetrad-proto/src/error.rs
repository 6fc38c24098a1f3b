//! Protocol errors.

use tetrad_core::{BoardError, GridError};
use tetrad_engine::EngineError;

/// Errors that can occur during protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The `position` command is missing the `empty` or `grid` keyword.
    #[error("malformed position command: missing empty or grid keyword")]
    MalformedPosition,

    /// Failed to parse a grid string.
    #[error("invalid grid {grid}: {source}")]
    InvalidGrid {
        /// The grid string that failed to parse.
        grid: String,
        #[source]
        source: GridError,
    },

    /// A column token is not a number.
    #[error("invalid move: {value}")]
    InvalidMove {
        /// The token that failed to parse.
        value: String,
    },

    /// A column could not be played.
    #[error("illegal move {col}: {source}")]
    IllegalMove {
        col: usize,
        #[source]
        source: BoardError,
    },

    /// A move was requested after the game ended.
    #[error("game is already over")]
    GameOver,

    /// A keyword was given without its value.
    #[error("missing value for {param}")]
    MissingValue {
        /// The keyword missing a value.
        param: String,
    },

    /// A keyword's value could not be parsed.
    #[error("invalid value for {param}: {value}")]
    InvalidValue {
        /// The keyword whose value failed.
        param: String,
        /// The offending value.
        value: String,
    },

    /// `setoption` named an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// The engine rejected a request.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// An I/O error occurred while reading commands or writing responses.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
