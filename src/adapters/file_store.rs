//! JSON-file key-value store.
//!
//! Persistent scope for the preference layer. The file holds a flat JSON
//! object of string keys to string values, the same shape browser local
//! storage exposes, e.g. `{"darkMode":"true","likeCount":"128"}`. Non-string
//! values are read back as their JSON text.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// The directory under the home directory holding folio state.
pub const STATE_DIR: &str = ".folio";

/// The preferences file name.
pub const PREFERENCES_FILE: &str = "preferences.json";

type Entries = BTreeMap<String, String>;

/// Key-value store persisted to a JSON file.
///
/// Every operation re-reads the file, so two handles on the same path observe
/// each other's writes. Writes go through a temporary file and a rename.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store at an explicit path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store at `~/.folio/preferences.json`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn default_location() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::new(home.join(STATE_DIR).join(PREFERENCES_FILE)))
    }

    /// Get the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if text.trim().is_empty() {
            return Ok(Entries::new());
        }

        let raw: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(&text).map_err(|e| StorageError::Corrupt {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        // Hand-edited files may hold bare JSON values; keep them as their text
        Ok(raw
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(text) => (key, text),
                other => (key, other.to_string()),
            })
            .collect())
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| StorageError::Encode {
            key: "*".to_string(),
            message: e.to_string(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt { message, .. }) => {
                tracing::warn!(
                    "Discarding corrupt preferences file {}: {}",
                    self.path.display(),
                    message
                );
                Entries::new()
            }
            Err(e) => return Err(e),
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
