//! Define a named service.

use crate::error::TransactionError;
use serde::{Deserialize, Serialize};
use stake_types::ServiceDefinition;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxDefineService {
    pub name: String,
    pub description: String,
}

impl TxDefineService {
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        if self.name.is_empty() {
            return Err(TransactionError::EmptyServiceName);
        }
        if self.description.is_empty() {
            return Err(TransactionError::EmptyServiceDescription);
        }
        Ok(())
    }

    /// The record the handler stores for this transaction.
    pub fn definition(&self) -> ServiceDefinition {
        ServiceDefinition {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}
