//! Error types for the history store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the history store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored record failed to serialize or deserialize.
    #[error("record serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A sealed field could not be decrypted (tampered data or wrong
    /// passphrase).
    #[error("could not decrypt field: {0}")]
    Crypto(String),
}
