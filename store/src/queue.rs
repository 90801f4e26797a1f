//! Persistent FIFO queues.
//!
//! A queue is a pair of `head`/`tail` counters plus one record per index,
//! all under `stake/queue/<type-byte>/`. Entries are popped strictly in
//! insertion order; nothing is ever reordered.

use crate::codec::{decode, encode};
use crate::keys::queue_prefix;
use crate::{KvStore, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use stake_types::{QueueElemModComm, QueueElemUnbond};
use std::marker::PhantomData;

/// Pending unbonding payouts.
pub const QUEUE_UNBOND: u8 = 0x01;
/// Commission-rate change history.
pub const QUEUE_COMMISSION: u8 = 0x02;

pub struct Queue<'a, S: ?Sized, T> {
    store: &'a S,
    prefix: Vec<u8>,
    _item: PhantomData<T>,
}

impl<'a, S: KvStore + ?Sized> Queue<'a, S, QueueElemUnbond> {
    pub fn unbonding(store: &'a S) -> Self {
        Self::load(store, QUEUE_UNBOND)
    }
}

impl<'a, S: KvStore + ?Sized> Queue<'a, S, QueueElemModComm> {
    pub fn commission_history(store: &'a S) -> Self {
        Self::load(store, QUEUE_COMMISSION)
    }
}

impl<'a, S, T> Queue<'a, S, T>
where
    S: KvStore + ?Sized,
    T: Serialize + DeserializeOwned,
{
    pub fn load(store: &'a S, type_byte: u8) -> Self {
        Self {
            store,
            prefix: queue_prefix(type_byte),
            _item: PhantomData,
        }
    }

    fn counter_key(&self, name: &[u8]) -> Vec<u8> {
        let mut key = self.prefix.clone();
        key.extend_from_slice(name);
        key
    }

    fn item_key(&self, index: u64) -> Vec<u8> {
        let mut key = self.counter_key(b"item/");
        key.extend_from_slice(&index.to_be_bytes());
        key
    }

    fn read_counter(&self, name: &[u8]) -> Result<u64, StoreError> {
        match self.store.get(&self.counter_key(name))? {
            Some(bytes) => {
                let arr: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    StoreError::Corruption("queue counter has unexpected byte length".into())
                })?;
                Ok(u64::from_be_bytes(arr))
            }
            None => Ok(0),
        }
    }

    fn write_counter(&self, name: &[u8], value: u64) -> Result<(), StoreError> {
        self.store.set(&self.counter_key(name), &value.to_be_bytes())
    }

    pub fn len(&self) -> Result<u64, StoreError> {
        let head = self.read_counter(b"head")?;
        let tail = self.read_counter(b"tail")?;
        tail.checked_sub(head)
            .ok_or_else(|| StoreError::Corruption("queue head is past its tail".into()))
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Append an entry at the tail.
    pub fn push(&self, item: &T) -> Result<(), StoreError> {
        let tail = self.read_counter(b"tail")?;
        self.store.set(&self.item_key(tail), &encode(item)?)?;
        self.write_counter(b"tail", tail + 1)
    }

    /// The head entry, or `None` when the queue is empty.
    pub fn peek(&self) -> Result<Option<T>, StoreError> {
        let head = self.read_counter(b"head")?;
        if head >= self.read_counter(b"tail")? {
            return Ok(None);
        }
        match self.store.get(&self.item_key(head))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Err(StoreError::Corruption(format!("queue entry {head} is missing"))),
        }
    }

    /// Remove and return the head entry.
    pub fn pop(&self) -> Result<Option<T>, StoreError> {
        let Some(item) = self.peek()? else {
            return Ok(None);
        };
        let head = self.read_counter(b"head")?;
        self.store.delete(&self.item_key(head))?;
        self.write_counter(b"head", head + 1)?;
        Ok(Some(item))
    }
}
