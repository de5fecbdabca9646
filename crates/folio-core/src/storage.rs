//! Key-value persistence that never fails loudly.

use crate::error::StorageError;
use fnv::FnvHashMap;

/// Backend for persisted preferences (browser `localStorage` on the web).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Wraps an optional backend and swallows every failure.
///
/// A missing backend (storage disabled, sandboxed frame) behaves like one
/// that fails every call: reads return `None`, writes are dropped.
#[derive(Debug)]
pub struct SafeStorage<S> {
    inner: Option<S>,
}

impl<S: KeyValueStore> SafeStorage<S> {
    pub fn new(store: S) -> Self {
        Self { inner: Some(store) }
    }

    pub fn unavailable() -> Self {
        Self { inner: None }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let store = self.inner.as_ref()?;
        match store.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("[storage] read {} failed: {}", key, e);
                None
            }
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        let Some(store) = self.inner.as_mut() else {
            return;
        };
        if let Err(e) = store.set(key, value) {
            log::debug!("[storage] write {}={} failed: {}", key, value, e);
        }
    }

    pub fn inner(&self) -> Option<&S> {
        self.inner.as_ref()
    }
}

/// In-memory store with switchable failures, for hosts without a browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Direct lookup that ignores `fail_reads`.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Rejected("quota exceeded".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
