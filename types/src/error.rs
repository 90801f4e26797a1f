//! Errors raised while constructing or parsing fundamental types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StakeTypesError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
