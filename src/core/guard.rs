//! Guard predicates that gate engine operations.
//!
//! The engine never errors when an operation arrives in the wrong status; it
//! consults a guard and silently ignores the call when the guard rejects it.

use super::state::State;
use std::marker::PhantomData;

/// Pure predicate deciding whether an operation may run in a given status.
///
/// # Example
///
/// ```rust
/// use guesswork::core::Guard;
/// use guesswork::GameStatus;
///
/// let can_guess = Guard::only(GameStatus::Playing);
///
/// assert!(can_guess.check(&GameStatus::Playing));
/// assert!(!can_guess.check(&GameStatus::Won));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// ```rust
    /// use guesswork::core::{Guard, State};
    /// use guesswork::GameStatus;
    ///
    /// let still_open = Guard::new(|s: &GameStatus| !s.is_final());
    /// assert!(still_open.check(&GameStatus::Won));
    /// ```
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that passes for exactly one status.
    pub fn only(status: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |current: &S| *current == status)
    }

    /// Check if the guard allows an operation in this status.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
