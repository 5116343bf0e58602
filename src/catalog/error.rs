//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while reading a character catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a valid catalog document
    #[error("Malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
