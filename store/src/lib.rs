//! Storage layer of the staking core.
//!
//! Everything persistent goes through the [`KvStore`] capability: a byte-keyed
//! get/set/delete interface with optional proof retrieval. The typed
//! repositories in this crate (candidates, bonds, params, services, queues)
//! are extension traits implemented for every `KvStore`, so a store handle is
//! passed explicitly into each operation and no global registry exists.
//!
//! The account-transfer capability used to pay out unbonds and mint rewards
//! is defined here as well, next to the store it usually shares.

pub mod bank;
pub mod batch;
pub mod bond;
pub mod candidate;
pub mod codec;
pub mod error;
pub mod keys;
pub mod params;
pub mod queue;
pub mod service;

pub use bank::{AccountTransfer, KvBank, TransferError};
pub use batch::WriteBatch;
pub use bond::BondStore;
pub use candidate::CandidateStore;
pub use error::StoreError;
pub use params::ParamsStore;
pub use queue::{Queue, QUEUE_COMMISSION, QUEUE_UNBOND};
pub use service::ServiceStore;

/// Byte-keyed storage backend.
///
/// Methods take `&self`; backends use interior mutability, matching how the
/// LMDB environment and the in-memory test store are shared.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    fn delete(&self, key: &[u8]) -> Result<(), StoreError>;

    /// Value plus an inclusion proof, for backends that can produce one.
    fn get_with_proof(&self, key: &[u8]) -> Result<(Option<Vec<u8>>, Option<Vec<u8>>), StoreError> {
        Ok((self.get(key)?, None))
    }
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &[u8]) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn get_with_proof(&self, key: &[u8]) -> Result<(Option<Vec<u8>>, Option<Vec<u8>>), StoreError> {
        (**self).get_with_proof(key)
    }
}
