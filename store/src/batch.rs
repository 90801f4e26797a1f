//! Write batching. Buffers every write of one tick in memory and flushes
//! them to the backing store only on [`WriteBatch::commit`].
//!
//! # Usage
//!
//! ```ignore
//! let batch = WriteBatch::new(&store);
//! batch.save_candidate(&candidate)?;
//! batch.commit()?;
//! ```
//!
//! Reads through the batch observe its own pending writes. If the batch is
//! dropped without committing, the backing store is left untouched.

use crate::{KvStore, StoreError};
use std::cell::RefCell;
use std::collections::BTreeMap;

pub struct WriteBatch<'a, S: KvStore + ?Sized> {
    inner: &'a S,
    /// `None` marks a pending delete.
    pending: RefCell<BTreeMap<Vec<u8>, Option<Vec<u8>>>>,
}

impl<'a, S: KvStore + ?Sized> WriteBatch<'a, S> {
    pub fn new(inner: &'a S) -> Self {
        Self {
            inner,
            pending: RefCell::new(BTreeMap::new()),
        }
    }

    /// Number of buffered writes and deletes.
    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Flush all buffered operations in key order. Returns how many were applied.
    pub fn commit(self) -> Result<usize, StoreError> {
        let pending = self.pending.into_inner();
        let count = pending.len();
        for (key, value) in pending {
            match value {
                Some(v) => self.inner.set(&key, &v)?,
                None => self.inner.delete(&key)?,
            }
        }
        Ok(count)
    }
}

impl<S: KvStore + ?Sized> KvStore for WriteBatch<'_, S> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        if let Some(value) = self.pending.borrow().get(key) {
            return Ok(value.clone());
        }
        self.inner.get(key)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.pending
            .borrow_mut()
            .insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), StoreError> {
        self.pending.borrow_mut().insert(key.to_vec(), None);
        Ok(())
    }
}
