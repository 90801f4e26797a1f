//! Bonding transactions: declare candidacy and delegate.

use crate::error::TransactionError;
use serde::{Deserialize, Serialize};
use stake_types::{Coin, Coins, Description, PublicKey};

/// Coins bonded to a candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondUpdate {
    pub pub_key: PublicKey,
    pub bond: Coin,
}

impl BondUpdate {
    /// Non-empty candidate and a well-formed, strictly positive amount.
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        if self.pub_key.is_empty() {
            return Err(TransactionError::EmptyCandidate);
        }
        let coins = Coins::from(self.bond.clone());
        if !coins.is_valid() {
            return Err(TransactionError::InvalidCoins(coins.to_string()));
        }
        if !coins.is_positive() {
            return Err(TransactionError::NonPositiveAmount);
        }
        Ok(())
    }
}

/// Declare a new candidacy, bonding the initial self-delegation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxDeclareCandidacy {
    pub bond: BondUpdate,
    pub description: Description,
}

impl TxDeclareCandidacy {
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        self.bond.validate_basic()
    }
}

/// Delegate coins to an existing candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxDelegate {
    pub bond: BondUpdate,
}

impl TxDelegate {
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        self.bond.validate_basic()
    }
}
