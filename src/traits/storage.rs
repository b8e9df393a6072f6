//! Key-value storage trait abstraction.
//!
//! Mirrors the browser storage contract the preference layer needs: string
//! keys, string values, synchronous last-writer-wins writes.

use crate::error::StorageError;

/// Trait for a string key-value store.
///
/// Implementations report failures; the caller decides whether to swallow
/// them. `Ok(None)` means the key is absent.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove every entry.
    fn clear(&self) -> Result<(), StorageError>;
}
