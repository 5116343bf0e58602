//! Leaderboard of finished sessions.
//!
//! The leaderboard is a short list of [`SessionRecord`]s kept sorted by score,
//! highest first, and capped in length. Storage goes through the
//! [`LeaderboardStore`] seam so hosts can back it with a file, browser storage
//! or anything else that can hold a list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;
pub mod shared;
pub mod store;

pub use error::StoreError;
pub use shared::{Placement, SharedLeaderboard};
pub use store::{FileStore, LeaderboardStore, MemoryStore, StoreFormat};

/// Version identifier for the stored leaderboard document
pub const LEADERBOARD_VERSION: u32 = 1;

/// Immutable summary of a completed session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique record identifier
    pub id: Uuid,

    /// Optional name the player chose
    #[serde(default)]
    pub player_name: Option<String>,

    /// Sum of all round scores
    pub total_score: u32,

    /// Rounds in the session
    pub rounds: usize,

    /// Rounds the player solved
    pub correct_guesses: usize,

    /// When the session was finalized
    pub completed_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(
        player_name: Option<String>,
        total_score: u32,
        rounds: usize,
        correct_guesses: usize,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_name,
            total_score,
            rounds,
            correct_guesses,
            completed_at,
        }
    }
}

/// Serialized form of the leaderboard.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeaderboardDocument {
    /// Document format version
    pub version: u32,

    /// When the document was written
    pub updated_at: DateTime<Utc>,

    /// Records, best first
    pub entries: Vec<SessionRecord>,
}

impl LeaderboardDocument {
    pub fn new(entries: Vec<SessionRecord>) -> Self {
        Self {
            version: LEADERBOARD_VERSION,
            updated_at: Utc::now(),
            entries,
        }
    }
}

/// Capacity-bounded list of records, sorted by score descending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<SessionRecord>,
    capacity: usize,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Build from stored entries, restoring order and the length cap.
    pub fn from_entries(mut entries: Vec<SessionRecord>, capacity: usize) -> Self {
        entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Add a record and return the 0-based rank it landed at.
    ///
    /// The record goes in front of existing entries with the same score.
    /// Returns `None` when it did not make the cut.
    pub fn insert(&mut self, record: SessionRecord) -> Option<usize> {
        let id = record.id;
        self.entries.insert(0, record);
        self.entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        self.entries.truncate(self.capacity);
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn entries(&self) -> &[SessionRecord] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&SessionRecord> {
        self.entries.first()
    }
}

/// Display label for a 0-based rank: medals for the podium, `#n` below it.
pub fn rank_label(rank: usize) -> String {
    match rank {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("#{}", n + 1),
    }
}
