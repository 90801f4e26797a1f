//! Edit a candidate's description.

use crate::error::TransactionError;
use serde::{Deserialize, Serialize};
use stake_types::{Description, PublicKey};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEditCandidacy {
    pub pub_key: PublicKey,
    pub description: Description,
}

impl TxEditCandidacy {
    /// A no-op edit (every description field empty) is rejected.
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        if self.pub_key.is_empty() {
            return Err(TransactionError::EmptyCandidate);
        }
        if self.description.is_empty() {
            return Err(TransactionError::EmptyDescription);
        }
        Ok(())
    }
}
