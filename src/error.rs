//! Error types for memdb.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in memdb operations.
///
/// A missing key is not an error; lookups return `None` for it.
#[derive(Debug, Error)]
pub enum Error {
    /// `next`, `key` or `value` called on an iterator that is exhausted,
    /// empty or closed. This is a usage bug at the call site.
    #[error("iterator is invalid")]
    InvalidIterator,

    #[error("batch was already written")]
    BatchWritten,

    #[error("unknown db backend: {0}")]
    UnknownBackend(String),

    #[error("db backend already registered: {0}")]
    BackendExists(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
