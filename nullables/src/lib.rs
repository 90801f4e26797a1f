//! Nullable infrastructure for deterministic testing.
//!
//! The external capabilities of the staking core (key-value storage and the
//! account-transfer ledger) are abstracted behind traits. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be inspected and preloaded programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod bank;
pub mod store;

pub use bank::{NullBank, Transfer};
pub use store::NullStore;
