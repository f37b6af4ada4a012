//! Error types for persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the key-value store and the stores built on it.
///
/// Callers in the game loop log these and carry on; nothing here is fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed data under key {key:?}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {key:?}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
