//! Error types for journali-core

use thiserror::Error;

/// Result type alias using journali-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in journali-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// `SQLite` error from the on-disk blob store
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Blob store failure not covered by a more specific variant
    #[error("Storage error: {0}")]
    Storage(String),

    /// The repository task behind a `JournalHandle` is gone
    #[error("Journal task is no longer running")]
    ChannelClosed,
}
