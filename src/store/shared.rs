//! Shared access to a single storage
//!
//! `Storage` has no interior locking. `SharedStorage` puts the whole
//! storage behind one read-write lock: writers are serialized, and readers
//! only run while no write is in progress.

use super::{FileId, Storage, ValueInfo};
use crate::error::StoreError;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::Value;
use std::sync::Arc;

/// Cloneable handle to a storage guarded by a single lock.
#[derive(Debug, Clone, Default)]
pub struct SharedStorage {
    inner: Arc<RwLock<Storage>>,
}

impl SharedStorage {
    pub fn new(storage: Storage) -> Self {
        Self {
            inner: Arc::new(RwLock::new(storage)),
        }
    }

    /// Hold the read lock for several queries.
    pub fn read(&self) -> RwLockReadGuard<'_, Storage> {
        self.inner.read()
    }

    /// Hold the write lock for a batch of updates.
    pub fn write(&self) -> RwLockWriteGuard<'_, Storage> {
        self.inner.write()
    }

    pub fn add_file(&self, name: &str) -> Result<FileId, StoreError> {
        self.inner.write().add_file(name)
    }

    pub fn set(&self, key: &str, value: impl Into<String>, file: FileId) -> Result<(), StoreError> {
        self.inner.write().set(key, value, file)
    }

    /// Load a whole structured value under one lock acquisition.
    pub fn load_value(&self, file_name: &str, value: &Value) -> Result<FileId, StoreError> {
        self.inner.write().load_value(file_name, value)
    }

    pub fn has(&self, key: &str) -> bool {
        self.inner.read().has(key)
    }

    pub fn sub_keys(&self, key: &str) -> Result<Vec<String>, StoreError> {
        self.inner.read().sub_keys(key)
    }

    pub fn get(&self, key: &str) -> Option<ValueInfo> {
        self.inner.read().get(key).cloned()
    }
}

impl From<Storage> for SharedStorage {
    fn from(storage: Storage) -> Self {
        Self::new(storage)
    }
}
