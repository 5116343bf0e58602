//! Engine error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors the engine reports instead of silently ignoring.
///
/// Calls that merely arrive in the wrong status are not errors; they are
/// no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Character pool has {available} entries but the session needs {required}")]
    InsufficientPool { required: usize, available: usize },

    #[error("A session needs at least one round")]
    InvalidRoundCount,

    #[error("Configured leaderboard capacity {configured} does not match the board's {board}")]
    CapacityMismatch { configured: usize, board: usize },

    #[error("A session needs at least one character")]
    EmptySession,

    #[error("Round {number} is outside a session of {rounds} rounds")]
    RoundOutOfRange { number: usize, rounds: usize },

    #[error("Invalid session configuration: {0}")]
    Config(#[from] BuildError),
}
