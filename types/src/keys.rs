//! Candidate public keys.

use crate::error::StakeTypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw public key bytes of a validator-candidate.
///
/// Ordering is plain lexicographic byte order, which is the tie-break order
/// for voting-power ranking and the merge order for validator-set diffs.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub Vec<u8>);

impl PublicKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// An empty key never identifies a candidate.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex rendering, used in store keys and logs.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse a key from its hex rendering, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, StakeTypesError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(digits)
            .map(Self)
            .map_err(|e| StakeTypesError::InvalidHex(format!("{s}: {e}")))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        write!(f, "PublicKey({})", &hex[..hex.len().min(16)])
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
