//! Validator-candidates and the validator view derived from them.

use crate::address::Address;
use crate::keys::PublicKey;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Bonded status of a candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[default]
    Active,
    Unbonded,
}

/// Free-form description of a candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub details: String,
}

impl Description {
    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A public key considered for validator status, with its share accounting.
///
/// Accumulated rewards show up as a rising `exchange_rate` (coins per share);
/// delegating coins mints shares at the current rate. `voting_power` is
/// written only by the validator-set deriver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub status: CandidateStatus,
    pub pub_key: PublicKey,
    /// Sender of the declare-candidacy tx; holds the self-delegation bond.
    pub owner: Address,
    /// Escrow account holding the coins bonded to this candidate.
    pub account: Address,
    /// Shares of the global stake pool.
    pub global_pool_shares: Decimal,
    /// Shares issued to this candidate's delegators.
    pub delegator_shares: Decimal,
    /// Total delegated shares.
    pub shares: Decimal,
    pub voting_power: u64,
    /// Coins per share.
    pub exchange_rate: Decimal,
    /// Fraction of delegator rewards retained by the candidate.
    pub commission: Decimal,
    pub description: Description,
}

impl Candidate {
    pub fn new(pub_key: PublicKey, owner: Address) -> Self {
        let account = Address::escrow_for(&pub_key);
        Self {
            status: CandidateStatus::Active,
            pub_key,
            owner,
            account,
            global_pool_shares: Decimal::ZERO,
            delegator_shares: Decimal::ZERO,
            shares: Decimal::ZERO,
            voting_power: 0,
            exchange_rate: Decimal::ONE,
            commission: Decimal::ZERO,
            description: Description::default(),
        }
    }

    /// Voting power implied by the current shares (whole shares only).
    pub fn shares_power(&self) -> u64 {
        if self.shares.is_sign_negative() {
            return 0;
        }
        self.shares.trunc().to_u64().unwrap_or(u64::MAX)
    }

    /// Total coin value of all shares at the current exchange rate.
    pub fn bonded_coins(&self) -> Option<Decimal> {
        self.shares.checked_mul(self.exchange_rate)
    }

    /// View this candidate as a validator. Only meaningful once it holds
    /// rank-qualified, nonzero voting power.
    pub fn validator(&self) -> Validator {
        Validator(self.clone())
    }
}

/// A candidate confirmed in the active set (`voting_power > 0`).
///
/// Derived from the candidate registry each block, never persisted on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Validator(Candidate);

impl Validator {
    /// The record reported to the consensus engine for this validator.
    pub fn update(&self) -> ValidatorUpdate {
        ValidatorUpdate {
            pub_key: self.0.pub_key.clone(),
            power: self.0.voting_power,
        }
    }

    pub fn into_candidate(self) -> Candidate {
        self.0
    }
}

impl Deref for Validator {
    type Target = Candidate;

    fn deref(&self) -> &Candidate {
        &self.0
    }
}

/// One entry of the sparse validator-set diff; `power == 0` means removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorUpdate {
    pub pub_key: PublicKey,
    pub power: u64,
}

impl ValidatorUpdate {
    pub fn removal(pub_key: PublicKey) -> Self {
        Self { pub_key, power: 0 }
    }
}
