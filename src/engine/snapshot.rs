//! Read-only view handed to the presentation layer after each operation.

use crate::catalog::Character;
use crate::clues::{Clue, MAX_CLUES};
use crate::core::StateHistory;
use crate::engine::session::Session;
use crate::engine::GameStatus;
use crate::scoring::PenaltySummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub current_round: usize,
    pub total_rounds: usize,
    pub clues_used: u32,
    pub max_clues: u32,
    pub incorrect_guesses: u32,
    pub last_guess: Option<String>,
    pub status: GameStatus,
    /// Points from the current round, 0 until it is solved
    pub round_score: u32,
    pub session_score: u32,
    pub rounds_solved: usize,
    pub clue: Clue,
    pub penalties: PenaltySummary,
    /// The answer, only once the round is solved
    pub revealed: Option<Character>,
    pub completed: bool,
    pub finalize_at: Option<DateTime<Utc>>,
    pub history: StateHistory<GameStatus>,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        let round = session.round();
        Self {
            current_round: round.number,
            total_rounds: session.total_rounds(),
            clues_used: round.clues_used,
            max_clues: MAX_CLUES as u32,
            incorrect_guesses: round.incorrect_guesses,
            last_guess: round.last_guess.clone(),
            status: round.status,
            round_score: round.score.unwrap_or(0),
            session_score: session.total_score(),
            rounds_solved: session.rounds_solved(),
            clue: session.current_clue(),
            penalties: session.penalties(),
            revealed: round
                .status
                .is_solved()
                .then(|| session.target().clone()),
            completed: session.is_completed(),
            finalize_at: session.finalize_at(),
            history: session.history().clone(),
        }
    }
}
