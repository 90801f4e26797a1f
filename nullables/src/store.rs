//! Nullable store: thread-safe in-memory key-value storage for testing.

use stake_store::{KvStore, StoreError};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// An in-memory `KvStore`. Keys iterate in byte order, like LMDB.
pub struct NullStore {
    entries: Mutex<BTreeMap<Vec<u8>, Vec<u8>>>,
    /// When set, every operation fails with a backend error.
    fail: Mutex<bool>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            fail: Mutex::new(false),
        }
    }

    /// Make every subsequent operation fail, to exercise error paths.
    pub fn set_failing(&self, failing: bool) {
        *self.fail.lock().unwrap() = failing;
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the full contents, for before/after comparisons.
    pub fn snapshot(&self) -> BTreeMap<Vec<u8>, Vec<u8>> {
        self.entries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if *self.fail.lock().unwrap() {
            return Err(StoreError::Backend("null store configured to fail".into()));
        }
        Ok(())
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for NullStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        self.check()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), StoreError> {
        self.check()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
