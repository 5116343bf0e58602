//! Session configuration and its fluent builder.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rounds per session when nothing else is configured.
pub const DEFAULT_ROUND_COUNT: usize = 5;

/// Entries kept on the leaderboard.
pub const DEFAULT_LEADERBOARD_CAPACITY: usize = 10;

/// Time the solved character stays on screen before the session is finalized.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(2000);

/// Tunables for a game session.
///
/// Deserializes from partial documents; missing fields take their defaults.
///
/// ```rust
/// use guesswork::SessionConfig;
///
/// let config: SessionConfig = serde_json::from_str(r#"{ "round_count": 3 }"#).unwrap();
/// assert_eq!(config.round_count, 3);
/// assert_eq!(config.leaderboard_capacity, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of rounds (characters) per session
    pub round_count: usize,

    /// Maximum leaderboard length
    pub leaderboard_capacity: usize,

    /// Delay between the last correct guess and finalization, in milliseconds
    pub reveal_delay_ms: u64,

    /// Fixed seed for character selection; entropy when absent
    pub seed: Option<u64>,

    /// Name stamped onto the session record
    pub player_name: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            round_count: DEFAULT_ROUND_COUNT,
            leaderboard_capacity: DEFAULT_LEADERBOARD_CAPACITY,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY.as_millis() as u64,
            seed: None,
            player_name: None,
        }
    }
}

impl SessionConfig {
    /// Start a builder seeded with the defaults.
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::new()
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Check the invariants the builder enforces.
    ///
    /// Useful for configs that arrived through deserialization.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.round_count == 0 {
            return Err(BuildError::ZeroRounds);
        }
        if self.leaderboard_capacity == 0 {
            return Err(BuildError::ZeroCapacity);
        }
        if self
            .player_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(BuildError::BlankPlayerName);
        }
        Ok(())
    }
}

/// Fluent builder for [`SessionConfig`].
#[derive(Clone, Debug, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds per session.
    pub fn rounds(mut self, count: usize) -> Self {
        self.config.round_count = count;
        self
    }

    /// Set how many records the leaderboard keeps.
    pub fn leaderboard_capacity(mut self, capacity: usize) -> Self {
        self.config.leaderboard_capacity = capacity;
        self
    }

    /// Set the pause between the final reveal and finalization.
    pub fn reveal_delay(mut self, delay: Duration) -> Self {
        self.config.reveal_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Fix the RNG seed so character selection is reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.config.player_name = Some(name.into());
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<SessionConfig, BuildError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
