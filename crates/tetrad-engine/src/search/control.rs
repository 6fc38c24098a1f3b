//! Search control: wall-clock budget for iterative deepening.

use std::time::{Duration, Instant};

/// Fraction of the time limit after which no new depth is started.
pub const SOFT_LIMIT_FRACTION: f64 = 0.8;

/// Decides when iterative deepening should stop starting new depths.
///
/// The clock starts when the control is created. There is no hard limit:
/// a depth that has started always runs to completion, so only
/// [`should_stop_iterating()`](SearchControl::should_stop_iterating) is
/// consulted, between depths.
#[derive(Debug, Clone)]
pub struct SearchControl {
    start: Instant,
    time_limit: Option<Duration>,
}

impl SearchControl {
    /// Control with no time limit: every requested depth is searched.
    pub fn new_infinite() -> Self {
        Self {
            start: Instant::now(),
            time_limit: None,
        }
    }

    /// Control with a time limit; clock starts immediately.
    pub fn new_timed(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            time_limit: Some(limit),
        }
    }

    /// Build from an optional limit.
    pub fn from_limit(limit: Option<Duration>) -> Self {
        match limit {
            Some(limit) => Self::new_timed(limit),
            None => Self::new_infinite(),
        }
    }

    /// The configured time limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Elapsed time after which no new depth is started.
    pub fn soft_limit(&self) -> Option<Duration> {
        self.time_limit
            .map(|limit| limit.mul_f64(SOFT_LIMIT_FRACTION))
    }

    /// Check whether iterative deepening should start another depth.
    ///
    /// Returns `true` once elapsed time exceeds [`soft_limit()`](Self::soft_limit).
    /// Always `false` without a time limit.
    pub fn should_stop_iterating(&self) -> bool {
        match self.soft_limit() {
            Some(soft) => self.elapsed() > soft,
            None => false,
        }
    }

    /// Elapsed time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
