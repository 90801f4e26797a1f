//! Unbond shares from a candidate.

use crate::error::TransactionError;
use serde::{Deserialize, Serialize};
use stake_types::PublicKey;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxUnbond {
    pub pub_key: PublicKey,
    pub shares: u64,
}

impl TxUnbond {
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        if self.pub_key.is_empty() {
            return Err(TransactionError::EmptyCandidate);
        }
        if self.shares == 0 {
            return Err(TransactionError::ZeroShares);
        }
        Ok(())
    }
}
