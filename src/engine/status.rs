//! Round status.

use crate::status_enum;

status_enum! {
    /// Where the current round stands.
    ///
    /// `Lost` is part of the status vocabulary shared with presentation layers
    /// but no engine operation ever produces it.
    pub enum GameStatus {
        /// Waiting for clue requests and guesses
        Playing as "playing",
        /// Round solved, more rounds remain
        Won as "won",
        /// Final round solved, session finalizing
        RoundCompleted as "round-completed",
        Lost as "lost",
    }
    final: [RoundCompleted, Lost]
    error: [Lost]
}

impl GameStatus {
    /// Whether the current round's character has been identified.
    pub fn is_solved(self) -> bool {
        matches!(self, Self::Won | Self::RoundCompleted)
    }
}
