//! Preference and session storage errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing a key-value store.
///
/// These never reach the user: the preference layer logs them and falls back
/// to defaults.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be used at all (no home directory, disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Filesystem failure on the backing file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object.
    #[error("corrupt storage file {}: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },

    /// A value could not be encoded for storage.
    #[error("cannot encode value for key '{key}': {message}")]
    Encode { key: String, message: String },
}

impl StorageError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Unavailable(_) => "E_STORE_UNAVAILABLE",
            StorageError::Io { .. } => "E_STORE_IO",
            StorageError::Corrupt { .. } => "E_STORE_CORRUPT",
            StorageError::Encode { .. } => "E_STORE_ENCODE",
        }
    }
}
