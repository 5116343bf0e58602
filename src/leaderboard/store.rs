//! Storage backends for the leaderboard.
//!
//! Stores have whole-list semantics: `load` returns everything, `save`
//! replaces everything. There is no incremental update.

use super::{LeaderboardDocument, SessionRecord, StoreError, LEADERBOARD_VERSION};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Persistence seam for the leaderboard.
pub trait LeaderboardStore: Send + Sync {
    /// Read the stored list. An absent store yields an empty list.
    fn load(&self) -> Result<Vec<SessionRecord>, StoreError>;

    /// Replace the stored list.
    fn save(&self, entries: &[SessionRecord]) -> Result<(), StoreError>;

    /// Read the stored list, treating unreadable or corrupt data as absent.
    fn load_or_empty(&self) -> Vec<SessionRecord> {
        self.load().unwrap_or_else(|e| {
            warn!(error = %e, "leaderboard unreadable, starting empty");
            Vec::new()
        })
    }
}

impl<S: LeaderboardStore + ?Sized> LeaderboardStore for Box<S> {
    fn load(&self) -> Result<Vec<SessionRecord>, StoreError> {
        (**self).load()
    }

    fn save(&self, entries: &[SessionRecord]) -> Result<(), StoreError> {
        (**self).save(entries)
    }
}

/// Process-local store, handy for tests and embedded hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Option<Vec<SessionRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries(entries: Vec<SessionRecord>) -> Self {
        Self {
            entries: Mutex::new(Some(entries)),
        }
    }

    /// What the last `save` wrote, if anything.
    pub fn stored(&self) -> Option<Vec<SessionRecord>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self) -> Result<Vec<SessionRecord>, StoreError> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, entries: &[SessionRecord]) -> Result<(), StoreError> {
        *self.entries.lock().unwrap_or_else(PoisonError::into_inner) = Some(entries.to_vec());
        Ok(())
    }
}

/// Encoding used by [`FileStore`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreFormat {
    /// Human-readable JSON
    #[default]
    Json,
    /// Compact bincode
    Binary,
}

impl StoreFormat {
    fn encode(self, document: &LeaderboardDocument) -> Result<Vec<u8>, StoreError> {
        match self {
            Self::Json => serde_json::to_vec_pretty(document)
                .map_err(|e| StoreError::SerializationFailed(e.to_string())),
            Self::Binary => bincode::serialize(document)
                .map_err(|e| StoreError::SerializationFailed(e.to_string())),
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<LeaderboardDocument, StoreError> {
        match self {
            Self::Json => serde_json::from_slice(bytes)
                .map_err(|e| StoreError::DeserializationFailed(e.to_string())),
            Self::Binary => bincode::deserialize(bytes)
                .map_err(|e| StoreError::DeserializationFailed(e.to_string())),
        }
    }
}

/// Leaderboard kept in a single file.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous list intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    format: StoreFormat,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: StoreFormat::default(),
        }
    }

    pub fn with_format(mut self, format: StoreFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl LeaderboardStore for FileStore {
    fn load(&self) -> Result<Vec<SessionRecord>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no leaderboard file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let document = self.format.decode(&bytes)?;
        if document.version != LEADERBOARD_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: document.version,
                supported: LEADERBOARD_VERSION,
            });
        }
        Ok(document.entries)
    }

    fn save(&self, entries: &[SessionRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let bytes = self
            .format
            .encode(&LeaderboardDocument::new(entries.to_vec()))?;
        let temp = self.temp_path();
        fs::write(&temp, bytes)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                warn!(path = %temp.display(), error = %cleanup, "failed to remove temp leaderboard file");
            }
            return Err(e.into());
        }

        debug!(path = %self.path.display(), entries = entries.len(), "leaderboard saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(score: u32) -> SessionRecord {
        SessionRecord::new(Some("Phoenix".to_string()), score, 5, 5, Utc::now())
    }

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert!(store.stored().is_none());
    }

    #[test]
    fn memory_store_replaces_whole_list() {
        let store = MemoryStore::with_entries(vec![record(1), record(2)]);
        store.save(&[record(3)]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].total_score, 3);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("ranking.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("ranking.json"));
        let entries = vec![record(420), record(300)];

        store.save(&entries).unwrap();

        assert_eq!(store.load().unwrap(), entries);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), b"x").unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(store.save(&[record(10)]), Err(StoreError::Io(_))));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn binary_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store =
            FileStore::new(dir.path().join("ranking.bin")).with_format(StoreFormat::Binary);
        let entries = vec![record(80)];

        store.save(&entries).unwrap();

        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn corrupt_file_is_an_error_but_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.json");
        fs::write(&path, b"{ not json").unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(
            store.load(),
            Err(StoreError::DeserializationFailed(_))
        ));
        assert!(store.load_or_empty().is_empty());
    }

    #[test]
    fn future_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.json");
        let mut document = LeaderboardDocument::new(vec![record(5)]);
        document.version = LEADERBOARD_VERSION + 1;
        fs::write(&path, serde_json::to_vec(&document).unwrap()).unwrap();

        let result = FileStore::new(&path).load();
        assert!(matches!(
            result,
            Err(StoreError::UnsupportedVersion { found, supported })
                if found == LEADERBOARD_VERSION + 1 && supported == LEADERBOARD_VERSION
        ));
    }
}
