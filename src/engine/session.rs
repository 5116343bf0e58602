//! Session and round state.
//!
//! These types hold the data; the engine decides when each mutation is
//! allowed.

use crate::catalog::Character;
use crate::clues::{self, Clue, MAX_CLUES};
use crate::core::{StateHistory, StateTransition};
use crate::engine::{EngineError, GameStatus};
use crate::scoring::{self, PenaltySummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a guess submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Not accepted in the current status; nothing changed
    Ignored,
    /// Wrong character; the miss counter went up
    Incorrect,
    /// Round solved for `points`
    Correct { points: u32 },
}

/// One guess-the-character cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based position in the session
    pub number: usize,
    /// Clues revealed so far, always in `1..=MAX_CLUES`
    pub clues_used: u32,
    pub incorrect_guesses: u32,
    /// Most recent guess, kept for highlighting
    pub last_guess: Option<String>,
    pub status: GameStatus,
    /// Points awarded once solved
    pub score: Option<u32>,
}

impl Round {
    fn new(number: usize) -> Self {
        Self {
            number,
            clues_used: 1,
            incorrect_guesses: 0,
            last_guess: None,
            status: GameStatus::Playing,
            score: None,
        }
    }
}

/// A fixed-length run of rounds over pre-selected characters.
///
/// Deserializing rejects an empty character list and a round number outside
/// `1..=characters.len()`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "SessionData")]
pub struct Session {
    characters: Vec<Character>,
    round: Round,
    total_score: u32,
    rounds_solved: usize,
    completed: bool,
    finalize_at: Option<DateTime<Utc>>,
    history: StateHistory<GameStatus>,
    started_at: DateTime<Utc>,
}

/// Serialized shape of a [`Session`], checked before it becomes one.
#[derive(Deserialize)]
struct SessionData {
    characters: Vec<Character>,
    round: Round,
    total_score: u32,
    rounds_solved: usize,
    completed: bool,
    finalize_at: Option<DateTime<Utc>>,
    history: StateHistory<GameStatus>,
    started_at: DateTime<Utc>,
}

impl TryFrom<SessionData> for Session {
    type Error = EngineError;

    fn try_from(data: SessionData) -> Result<Self, Self::Error> {
        if data.characters.is_empty() {
            return Err(EngineError::EmptySession);
        }
        let rounds = data.characters.len();
        if !(1..=rounds).contains(&data.round.number) {
            return Err(EngineError::RoundOutOfRange {
                number: data.round.number,
                rounds,
            });
        }
        Ok(Self {
            characters: data.characters,
            round: data.round,
            total_score: data.total_score,
            rounds_solved: data.rounds_solved,
            completed: data.completed,
            finalize_at: data.finalize_at,
            history: data.history,
            started_at: data.started_at,
        })
    }
}

impl Session {
    /// Start at round 1. `characters` must be non-empty.
    pub(crate) fn new(characters: Vec<Character>, started_at: DateTime<Utc>) -> Self {
        debug_assert!(!characters.is_empty());
        Self {
            characters,
            round: Round::new(1),
            total_score: 0,
            rounds_solved: 0,
            completed: false,
            finalize_at: None,
            history: StateHistory::new(),
            started_at,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn status(&self) -> GameStatus {
        self.round.status
    }

    pub fn total_rounds(&self) -> usize {
        self.characters.len()
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn rounds_solved(&self) -> usize {
        self.rounds_solved
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_round(&self) -> bool {
        self.round.number >= self.total_rounds()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The character behind the current round.
    ///
    /// Construction and deserialization keep `round.number` within
    /// `1..=characters.len()`.
    pub fn target(&self) -> &Character {
        &self.characters[self.round.number - 1]
    }

    pub fn current_clue(&self) -> Clue {
        clues::clue(self.target(), self.round.clues_used as usize)
    }

    pub fn revealed_clues(&self) -> Vec<Clue> {
        clues::revealed(self.target(), self.round.clues_used as usize)
    }

    pub fn penalties(&self) -> PenaltySummary {
        PenaltySummary::new(self.round.clues_used, self.round.incorrect_guesses)
    }

    pub fn history(&self) -> &StateHistory<GameStatus> {
        &self.history
    }

    /// When the scheduled finalization is due, if one is pending.
    pub fn finalize_at(&self) -> Option<DateTime<Utc>> {
        self.finalize_at
    }

    fn set_status(&mut self, to: GameStatus, at: DateTime<Utc>) {
        let from = self.round.status;
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: at,
            round: self.round.number,
        });
        self.round.status = to;
        debug!(round = self.round.number, %from, %to, "status transition");
    }

    pub(crate) fn reveal_clue(&mut self) -> bool {
        if self.round.clues_used as usize >= MAX_CLUES {
            return false;
        }
        self.round.clues_used += 1;
        true
    }

    /// Evaluate a guess. On the last round, a correct guess schedules
    /// finalization `reveal_delay` after `at`.
    pub(crate) fn guess(
        &mut self,
        name: &str,
        at: DateTime<Utc>,
        reveal_delay: chrono::Duration,
    ) -> GuessOutcome {
        self.round.last_guess = Some(name.to_string());

        if name != self.target().name {
            self.round.incorrect_guesses = self.round.incorrect_guesses.saturating_add(1);
            return GuessOutcome::Incorrect;
        }

        let points = scoring::score(self.round.clues_used, self.round.incorrect_guesses);
        self.round.score = Some(points);
        self.total_score = self.total_score.saturating_add(points);
        self.rounds_solved += 1;

        if self.is_last_round() {
            self.set_status(GameStatus::RoundCompleted, at);
            self.finalize_at = Some(at.checked_add_signed(reveal_delay).unwrap_or(at));
        } else {
            self.set_status(GameStatus::Won, at);
        }
        GuessOutcome::Correct { points }
    }

    pub(crate) fn advance(&mut self, at: DateTime<Utc>) {
        let next = self.round.number + 1;
        self.round = Round {
            status: self.round.status,
            ..Round::new(next)
        };
        self.set_status(GameStatus::Playing, at);
    }

    /// Consume the scheduled finalization. Returns `false` if none is pending.
    pub(crate) fn take_finalization(&mut self) -> bool {
        if self.finalize_at.take().is_none() {
            return false;
        }
        self.completed = true;
        true
    }
}
