//! Named, persisted preferences.
//!
//! A [`PreferenceStore`] sits over two key-value stores: a persistent one that
//! survives restarts and a session one that lives as long as the process.
//! Values are JSON-encoded, so `true` and `128` round-trip as they would
//! through browser local storage.
//!
//! Storage is a convenience here, not a guarantee: a failed read yields the
//! caller's default and a failed write is logged and dropped.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::MemoryStore;
use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// How long a preference lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Survives restarts.
    Persistent,
    /// Cleared when the process exits.
    Session,
}

/// A preference name together with its scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreferenceKey {
    name: Cow<'static, str>,
    scope: Scope,
}

impl PreferenceKey {
    /// A persistent key with a fixed name.
    pub const fn persistent(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            scope: Scope::Persistent,
        }
    }

    /// A session key, typically built from runtime data.
    pub fn session(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            scope: Scope::Session,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The keys the application persists.
pub mod keys {
    use super::PreferenceKey;

    pub const DARK_MODE: PreferenceKey = PreferenceKey::persistent("darkMode");
    pub const LIKE_COUNT: PreferenceKey = PreferenceKey::persistent("likeCount");
    pub const HAS_LIKED: PreferenceKey = PreferenceKey::persistent("hasLiked");
    pub const VISITOR_COUNT: PreferenceKey = PreferenceKey::persistent("visitorCount");
}

/// Typed access to persistent and session key-value storage.
///
/// Cloning is cheap; clones share the underlying stores.
#[derive(Clone)]
pub struct PreferenceStore {
    persistent: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(persistent: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self {
            persistent,
            session,
        }
    }

    /// A store with both scopes held in memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    fn backend(&self, scope: Scope) -> &dyn KeyValueStore {
        match scope {
            Scope::Persistent => self.persistent.as_ref(),
            Scope::Session => self.session.as_ref(),
        }
    }

    /// Returns the stored value, or `None` if it is absent, unparsable, or the
    /// store cannot be read.
    pub fn lookup<T: DeserializeOwned>(&self, key: &PreferenceKey) -> Option<T> {
        let raw = match self.backend(key.scope()).get_raw(key.name()) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("[{}] Reading '{}' failed: {}", e.error_code(), key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Ignoring malformed value for '{}': {}", key, e);
                None
            }
        }
    }

    /// Returns the stored value for `key`, or `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &PreferenceKey, default: T) -> T {
        self.lookup(key).unwrap_or(default)
    }

    /// Whether a parsable value is stored under `key`.
    pub fn contains(&self, key: &PreferenceKey) -> bool {
        self.lookup::<serde_json::Value>(key).is_some()
    }

    /// Write `value` under `key`. Returns `false` if the write was dropped.
    pub fn set<T: Serialize + ?Sized>(&self, key: &PreferenceKey, value: &T) -> bool {
        match self.try_set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("[{}] Writing '{}' failed: {}", e.error_code(), key, e);
                false
            }
        }
    }

    fn try_set<T: Serialize + ?Sized>(
        &self,
        key: &PreferenceKey,
        value: &T,
    ) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value).map_err(|e| StorageError::Encode {
            key: key.name().to_string(),
            message: e.to_string(),
        })?;
        self.backend(key.scope()).set_raw(key.name(), &encoded)
    }

    /// Remove every entry in `scope`.
    pub fn clear(&self, scope: Scope) -> bool {
        match self.backend(scope).clear() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("[{}] Clearing {:?} storage failed: {}", e.error_code(), scope, e);
                false
            }
        }
    }
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}
