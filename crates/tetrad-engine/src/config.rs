//! Engine configuration.

use std::time::Duration;

use tetrad_core::{COLS, ROWS};

use crate::compute::{Algorithm, DEFAULT_DEPTH, DEFAULT_TIME_LIMIT};
use crate::error::EngineError;

/// Deepest search that can ever be useful: one ply per cell.
pub const MAX_DEPTH: u8 = (ROWS * COLS) as u8;

/// Search settings for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Which search to run.
    pub algorithm: Algorithm,
    /// Search depth in plies; for iterative deepening, the maximum depth.
    pub depth: u8,
    /// Wall-clock budget for iterative deepening. `None` searches every depth.
    pub time_limit: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::IterativeDeepening,
            depth: DEFAULT_DEPTH,
            time_limit: Some(DEFAULT_TIME_LIMIT),
        }
    }
}

impl EngineConfig {
    /// Config for `algorithm` with the default depth and time limit.
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Reject depths that are zero or beyond [`MAX_DEPTH`].
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.depth == 0 {
            return Err(EngineError::InvalidConfig("depth must be at least 1".into()));
        }
        if self.depth > MAX_DEPTH {
            return Err(EngineError::InvalidConfig(format!(
                "depth {} exceeds maximum {MAX_DEPTH}",
                self.depth
            )));
        }
        Ok(())
    }
}
