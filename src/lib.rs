//! Guesswork: the rules engine of a clue-based character guessing game
//!
//! A player is shown clues about a hidden character, one more each time they
//! ask, and tries to name it. Fewer clues and fewer wrong guesses earn more
//! points. A session is a fixed number of rounds; when the last one is solved
//! the total lands on a top-ten leaderboard.
//!
//! The crate is the pure core only. Rendering, fetching the catalog over the
//! network and choosing where the leaderboard lives are left to the host.
//!
//! # Modules
//!
//! - [`scoring`]: points for a solved round
//! - [`clues`]: the five ordered clues of a character
//! - [`engine`]: the session state machine
//! - [`leaderboard`]: ranked records and their storage seam
//! - [`catalog`]: characters and catalog payload parsing
//! - [`core`]: generic status, guard and history building blocks
//!
//! # Example
//!
//! ```rust
//! use guesswork::catalog::{Ability, Character};
//! use guesswork::leaderboard::{MemoryStore, SharedLeaderboard};
//! use guesswork::{GameEngine, GameStatus, GuessOutcome, SessionConfig};
//!
//! let pool = vec![
//!     Character::new("1", "Sova", "Initiator", "Russian scout", vec![Ability::new("Owl Drone")]),
//!     Character::new("2", "Omen", "Controller", "A phantom", vec![Ability::new("Paranoia")]),
//! ];
//!
//! let config = SessionConfig::builder().rounds(2).seed(9).build().unwrap();
//! let leaderboard = SharedLeaderboard::open(MemoryStore::new(), config.leaderboard_capacity);
//! let mut engine = GameEngine::new(config, leaderboard).unwrap();
//! engine.start_session(&pool).unwrap();
//!
//! engine.request_clue();
//! let answer = engine.session().unwrap().target().name.clone();
//! assert_eq!(engine.submit_guess(&answer), GuessOutcome::Correct { points: 80 });
//! assert_eq!(engine.status(), Some(GameStatus::Won));
//! assert!(engine.advance_round());
//! ```

pub mod builder;
pub mod catalog;
pub mod clues;
pub mod core;
pub mod engine;
pub mod leaderboard;
pub mod scoring;

pub use builder::{BuildError, SessionConfig, SessionConfigBuilder};
pub use catalog::{Ability, Catalog, Character};
pub use self::core::{Guard, State, StateHistory, StateTransition};
pub use engine::{
    EngineError, FinalizedSession, GameEngine, GameStatus, GuessOutcome, SessionSnapshot,
};
pub use leaderboard::{LeaderboardStore, SessionRecord, SharedLeaderboard};
