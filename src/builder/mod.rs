//! Configuration builder and declaration macros.
//!
//! Sessions are tuned through [`SessionConfig`], built fluently and validated
//! up front so the engine never has to second-guess its settings.

pub mod config;
pub mod error;
pub mod macros;

pub use config::{
    SessionConfig, SessionConfigBuilder, DEFAULT_LEADERBOARD_CAPACITY, DEFAULT_REVEAL_DELAY,
    DEFAULT_ROUND_COUNT,
};
pub use error::BuildError;
