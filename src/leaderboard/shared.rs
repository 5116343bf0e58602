//! Leaderboard handle shared between sessions.

use super::{Leaderboard, LeaderboardStore, SessionRecord};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

/// Where a submitted record ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// 0-based rank, `None` if the record fell off the list
    pub rank: Option<usize>,
    /// Whether the updated list reached the store
    pub persisted: bool,
}

struct Inner<St> {
    store: St,
    board: Mutex<Leaderboard>,
}

/// Clonable handle to a store-backed leaderboard.
///
/// The list is read from the store once, when the handle is opened. Each
/// submission updates the in-memory list and writes it back while holding a
/// single lock, so concurrent sessions never interleave read-modify-write.
pub struct SharedLeaderboard<St: LeaderboardStore> {
    inner: Arc<Inner<St>>,
}

impl<St: LeaderboardStore> Clone for SharedLeaderboard<St> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<St: LeaderboardStore> std::fmt::Debug for SharedLeaderboard<St> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedLeaderboard")
            .field("board", &*self.lock())
            .finish_non_exhaustive()
    }
}

impl<St: LeaderboardStore> SharedLeaderboard<St> {
    /// Load the stored list, tolerating an absent or corrupt store.
    pub fn open(store: St, capacity: usize) -> Self {
        let board = Leaderboard::from_entries(store.load_or_empty(), capacity);
        Self {
            inner: Arc::new(Inner {
                store,
                board: Mutex::new(board),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Leaderboard> {
        self.inner
            .board
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a record and persist the updated list.
    ///
    /// A failed write is logged; the in-memory list keeps the record.
    pub fn submit(&self, record: SessionRecord) -> Placement {
        let mut board = self.lock();
        let score = record.total_score;
        let rank = board.insert(record);

        let persisted = match self.inner.store.save(board.entries()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to persist leaderboard");
                false
            }
        };

        info!(score, ?rank, persisted, "session recorded on leaderboard");
        Placement { rank, persisted }
    }

    /// Copy of the current entries, best first.
    pub fn entries(&self) -> Vec<SessionRecord> {
        self.lock().entries().to_vec()
    }

    /// Most entries the board keeps.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn store(&self) -> &St {
        &self.inner.store
    }
}
