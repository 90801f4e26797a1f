use thiserror::Error;

/// Failures of the staking state store. All of them abort the current tick.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required record, such as the params singleton, was never written.
    #[error("stake record missing: {0}")]
    NotFound(String),

    #[error("key-value backend failed: {0}")]
    Backend(String),

    #[error("cannot encode or decode stake record: {0}")]
    Serialization(String),

    /// Stored records contradict each other, e.g. an indexed candidate without a record.
    #[error("inconsistent stake state: {0}")]
    Corruption(String),
}
