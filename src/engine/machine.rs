//! The session engine.

use crate::builder::SessionConfig;
use crate::catalog::Character;
use crate::clues::Clue;
use crate::core::Guard;
use crate::engine::session::{GuessOutcome, Session};
use crate::engine::snapshot::SessionSnapshot;
use crate::engine::{EngineError, GameStatus};
use crate::leaderboard::{LeaderboardStore, Placement, SessionRecord, SharedLeaderboard};
use crate::scoring::PenaltySummary;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// A finished session and where it placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalizedSession {
    pub record: SessionRecord,
    pub placement: Placement,
}

/// Drives sessions over a character pool and files the results on a
/// leaderboard.
///
/// Every operation other than [`start_session`](Self::start_session) is a
/// silent no-op when the current status does not allow it.
///
/// Solving the last round only schedules finalization. The host must drive
/// [`poll`](Self::poll) (or call [`finalize_session`](Self::finalize_session))
/// for the record to reach the leaderboard; the engine runs no timer of its
/// own. Starting another session also flushes a pending record.
///
/// ```rust
/// use guesswork::catalog::{Ability, Character};
/// use guesswork::leaderboard::{MemoryStore, SharedLeaderboard};
/// use guesswork::{GameEngine, GameStatus, GuessOutcome, SessionConfig};
///
/// let pool = vec![Character::new("1", "Sage", "Sentinel", "Healer", vec![Ability::new("Barrier Orb")])];
/// let config = SessionConfig::builder().rounds(1).seed(3).build().unwrap();
/// let leaderboard = SharedLeaderboard::open(MemoryStore::new(), config.leaderboard_capacity);
/// let mut engine = GameEngine::new(config, leaderboard).unwrap();
///
/// engine.start_session(&pool).unwrap();
/// assert_eq!(engine.submit_guess("Sage"), GuessOutcome::Correct { points: 100 });
/// assert_eq!(engine.status(), Some(GameStatus::RoundCompleted));
///
/// let finished = engine.finalize_session().unwrap();
/// assert_eq!(finished.record.total_score, 100);
/// assert_eq!(engine.view_leaderboard().len(), 1);
/// ```
pub struct GameEngine<St: LeaderboardStore> {
    config: SessionConfig,
    rng: ChaCha8Rng,
    leaderboard: SharedLeaderboard<St>,
    session: Option<Session>,
    accepts_input: Guard<GameStatus>,
    accepts_advance: Guard<GameStatus>,
}

impl<St: LeaderboardStore> GameEngine<St> {
    pub fn new(
        config: SessionConfig,
        leaderboard: SharedLeaderboard<St>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let board = leaderboard.capacity();
        if board != config.leaderboard_capacity {
            return Err(EngineError::CapacityMismatch {
                configured: config.leaderboard_capacity,
                board,
            });
        }
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            leaderboard,
            session: None,
            accepts_input: Guard::only(GameStatus::Playing),
            accepts_advance: Guard::only(GameStatus::Won),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn status(&self) -> Option<GameStatus> {
        self.session.as_ref().map(Session::status)
    }

    pub fn leaderboard(&self) -> &SharedLeaderboard<St> {
        &self.leaderboard
    }

    /// Start a session with the configured number of rounds.
    pub fn start_session(&mut self, pool: &[Character]) -> Result<(), EngineError> {
        self.start_session_with_rounds(pool, self.config.round_count)
    }

    /// Start a session of `round_count` rounds drawn without replacement
    /// from `pool`.
    ///
    /// A finalization still pending from the previous session fires first.
    pub fn start_session_with_rounds(
        &mut self,
        pool: &[Character],
        round_count: usize,
    ) -> Result<(), EngineError> {
        if round_count == 0 {
            return Err(EngineError::InvalidRoundCount);
        }
        if pool.len() < round_count {
            return Err(EngineError::InsufficientPool {
                required: round_count,
                available: pool.len(),
            });
        }

        if self.finalization_due_at().is_some() {
            debug!("flushing pending finalization before new session");
            self.finalize_session();
        }

        let mut picked = pool.to_vec();
        picked.shuffle(&mut self.rng);
        picked.truncate(round_count);

        info!(rounds = round_count, pool = pool.len(), "session started");
        self.session = Some(Session::new(picked, Utc::now()));
        Ok(())
    }

    fn playable_session(&mut self) -> Option<&mut Session> {
        let guard = &self.accepts_input;
        self.session.as_mut().filter(|s| guard.check(&s.status()))
    }

    /// Reveal the next clue. Returns whether anything changed.
    pub fn request_clue(&mut self) -> bool {
        self.playable_session()
            .is_some_and(|session| session.reveal_clue())
    }

    /// Check `name` against the current round's character.
    pub fn submit_guess(&mut self, name: &str) -> GuessOutcome {
        let reveal_delay = chrono::Duration::from_std(self.config.reveal_delay())
            .unwrap_or_else(|_| chrono::Duration::zero());
        let Some(session) = self.playable_session() else {
            return GuessOutcome::Ignored;
        };

        let outcome = session.guess(name, Utc::now(), reveal_delay);
        if let GuessOutcome::Correct { points } = outcome {
            info!(
                round = session.round().number,
                points,
                total = session.total_score(),
                "round solved"
            );
        }
        outcome
    }

    /// Move to the next round. Returns whether anything changed.
    pub fn advance_round(&mut self) -> bool {
        let guard = &self.accepts_advance;
        match self.session.as_mut().filter(|s| guard.check(&s.status())) {
            Some(session) => {
                session.advance(Utc::now());
                true
            }
            None => false,
        }
    }

    /// When the pending finalization is due, if the last round has been won.
    pub fn finalization_due_at(&self) -> Option<DateTime<Utc>> {
        self.session.as_ref().and_then(Session::finalize_at)
    }

    /// Fire the scheduled finalization if it is due at `now`.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<FinalizedSession> {
        match self.finalization_due_at() {
            Some(due) if due <= now => self.finalize_session(),
            _ => None,
        }
    }

    /// Finalize right away, without waiting for the reveal delay.
    ///
    /// Yields the record exactly once per session; later calls return `None`.
    pub fn finalize_session(&mut self) -> Option<FinalizedSession> {
        let session = self.session.as_mut()?;
        if !session.take_finalization() {
            return None;
        }

        let record = SessionRecord::new(
            self.config.player_name.clone(),
            session.total_score(),
            session.total_rounds(),
            session.rounds_solved(),
            Utc::now(),
        );
        let placement = self.leaderboard.submit(record.clone());
        info!(
            score = record.total_score,
            correct = record.correct_guesses,
            rank = ?placement.rank,
            "session finalized"
        );
        Some(FinalizedSession { record, placement })
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(SessionSnapshot::from)
    }

    pub fn current_clue(&self) -> Option<Clue> {
        self.session.as_ref().map(Session::current_clue)
    }

    pub fn revealed_clues(&self) -> Vec<Clue> {
        self.session
            .as_ref()
            .map(Session::revealed_clues)
            .unwrap_or_default()
    }

    pub fn penalty_summary(&self) -> Option<PenaltySummary> {
        self.session.as_ref().map(Session::penalties)
    }

    /// Current leaderboard entries, best first.
    pub fn view_leaderboard(&self) -> Vec<SessionRecord> {
        self.leaderboard.entries()
    }
}
