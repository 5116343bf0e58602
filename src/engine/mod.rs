//! Session engine.
//!
//! Owns round progression, clue issuance, guess evaluation and scoring, and
//! files a [`SessionRecord`](crate::leaderboard::SessionRecord) when the last
//! round is won.
//!
//! Status flow:
//!
//! ```text
//! Playing --correct guess--> Won --advance--> Playing ...
//! Playing --correct guess on last round--> RoundCompleted --finalize--> (completed)
//! ```

mod error;
mod machine;
mod session;
mod snapshot;
mod status;

pub use error::EngineError;
pub use machine::{FinalizedSession, GameEngine};
pub use session::{GuessOutcome, Round, Session};
pub use snapshot::SessionSnapshot;
pub use status::GameStatus;
