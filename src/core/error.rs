//! Error taxonomy for the puzzle core.
//!
//! The core has no I/O, so the taxonomy is deliberately small: bad caller
//! input is the only recoverable error. Guard conditions (clicking a used
//! tile, acting on a finished round) are policy no-ops, not errors, and
//! invariant violations are treated as programming errors via
//! `debug_assert!` at the mutation sites.

/// Errors produced by the puzzle core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Caller supplied input the operation cannot work with
    /// (e.g., drawing a target from an empty tile pool).
    InvalidInput(&'static str),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}
