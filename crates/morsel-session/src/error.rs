//! Session store error types.

use thiserror::Error;

/// Errors that can occur when persisting session records.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Store I/O failure.
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized for storage.
    #[error("record serialization error: {0}")]
    Serialize(serde_json::Error),

    /// A stored record could not be parsed back.
    #[error("malformed record: {0}")]
    Malformed(serde_json::Error),
}
