//! Build errors for session configuration.

use thiserror::Error;

/// Errors that can occur when building a [`SessionConfig`](super::SessionConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Round count must be at least 1")]
    ZeroRounds,

    #[error("Leaderboard capacity must be at least 1")]
    ZeroCapacity,

    #[error("Player name must not be blank")]
    BlankPlayerName,
}
