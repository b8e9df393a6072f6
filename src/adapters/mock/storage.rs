//! Failing key-value store.

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// A store whose every operation fails, standing in for disabled or full
/// storage.
#[derive(Debug, Clone, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get_raw(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn set_raw(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }
}
