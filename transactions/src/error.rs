use thiserror::Error;

/// Reasons a transaction fails structural validation.
///
/// These are recoverable: the transaction is rejected before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("cannot bond to an empty candidate")]
    EmptyCandidate,

    #[error("invalid coins: {0}")]
    InvalidCoins(String),

    #[error("amount must be > 0")]
    NonPositiveAmount,

    #[error("transaction must include some information to modify")]
    EmptyDescription,

    #[error("shares must be > 0")]
    ZeroShares,

    #[error("service name cannot be empty")]
    EmptyServiceName,

    #[error("service description cannot be empty")]
    EmptyServiceDescription,

    #[error("denomination {denom} is not bondable, expected {allowed}")]
    DenomNotAllowed { denom: String, allowed: String },
}
