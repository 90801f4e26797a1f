//! Engine errors.
//!
//! [`TickError`] is fatal for the block being processed; [`StakeError`]
//! separates it from the recoverable transaction rejections.

use stake_store::{StoreError, TransferError};
use stake_transactions::TransactionError;
use stake_types::{ArithmeticError, PublicKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TickError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("account transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("candidate {0} referenced by a queued unbond does not exist")]
    MissingCandidate(PublicKey),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("genesis lists candidate {0} more than once")]
    DuplicateGenesisCandidate(PublicKey),
}

#[derive(Debug, Error)]
pub enum StakeError {
    /// The transaction is rejected; state is untouched.
    #[error("invalid transaction: {0}")]
    Invalid(#[from] TransactionError),

    /// Block processing must stop.
    #[error("fatal: {0}")]
    Fatal(#[from] TickError),
}

impl From<StoreError> for StakeError {
    fn from(e: StoreError) -> Self {
        Self::Fatal(TickError::Store(e))
    }
}

impl StakeError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }
}
