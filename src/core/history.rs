//! Status transition history.
//!
//! Every status change the engine makes during a session is appended here so
//! the presentation layer (or a test) can replay how a session unfolded.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single status change.
///
/// # Example
///
/// ```rust
/// use guesswork::core::StateTransition;
/// use guesswork::GameStatus;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: GameStatus::Playing,
///     to: GameStatus::Won,
///     timestamp: Utc::now(),
///     round: 1,
/// };
/// assert_eq!(transition.round, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Status before the change
    pub from: S,
    /// Status after the change
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// 1-based round the change happened in
    pub round: usize,
}

/// Ordered, append-only history of status changes.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use guesswork::core::{StateHistory, StateTransition};
/// use guesswork::GameStatus;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: GameStatus::Playing,
///         to: GameStatus::Won,
///         timestamp: Utc::now(),
///         round: 1,
///     })
///     .record(StateTransition {
///         from: GameStatus::Won,
///         to: GameStatus::Playing,
///         timestamp: Utc::now(),
///         round: 2,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&GameStatus::Playing, &GameStatus::Won, &GameStatus::Playing]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Statuses traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Transitions that happened during the given round.
    pub fn for_round(&self, round: usize) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter().filter(move |t| t.round == round)
    }

    /// All transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Whether no transition has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
