//! Fundamental types for the staking core.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! keys, addresses, coins, exact decimal arithmetic, staking parameters,
//! candidates/validators, delegator bonds and the time-delayed queue entries.

pub mod address;
pub mod bond;
pub mod candidate;
pub mod coin;
pub mod decimal;
pub mod error;
pub mod keys;
pub mod params;
pub mod queue;
pub mod service;

pub use address::Address;
pub use bond::DelegatorBond;
pub use candidate::{Candidate, CandidateStatus, Description, Validator, ValidatorUpdate};
pub use coin::{Coin, Coins};
pub use decimal::{fraction, to_coin_amount, ArithmeticError};
pub use error::StakeTypesError;
pub use keys::PublicKey;
pub use params::Params;
pub use queue::{QueueElemModComm, QueueElemUnbond};
pub use rust_decimal::Decimal;
pub use service::ServiceDefinition;

/// Name of the staking module; used as the store prefix and in tx type names.
pub const MODULE_NAME: &str = "stake";
