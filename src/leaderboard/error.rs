//! Leaderboard storage error types.

use thiserror::Error;

/// Errors that can occur while loading or saving the leaderboard
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Leaderboard I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Stored document was written by an incompatible version
    #[error("Unsupported leaderboard version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
