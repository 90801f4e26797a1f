//! LMDB storage backend for the staking core.
//!
//! Implements the `KvStore` capability from `stake-store` with the `heed`
//! LMDB bindings. All module state lives in one named database inside a
//! single environment.

pub mod environment;
pub mod error;

pub use environment::LmdbStore;
pub use error::LmdbError;
