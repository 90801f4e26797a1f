//! Account addresses.

use crate::error::StakeTypesError;
use crate::keys::PublicKey;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

type Blake2b256 = Blake2b<U32>;

/// An account identifier understood by the external account-transfer module.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Prefix of module-owned escrow accounts.
    pub const ESCROW_PREFIX: &'static str = "stake/escrow/";
    /// Longest address, in bytes, accepted from user input.
    pub const MAX_LEN: usize = 256;

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parse a user-supplied address, rejecting empty or oversized strings
    /// and whitespace.
    pub fn parse(raw: &str) -> Result<Self, StakeTypesError> {
        if raw.is_empty() || raw.len() > Self::MAX_LEN || raw.chars().any(char::is_whitespace) {
            return Err(StakeTypesError::InvalidAddress(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// The escrow account holding the bonded coins of a candidate.
    ///
    /// Derived as `stake/escrow/` + hex(blake2b-256(pubkey)), so every node
    /// computes the same account without storing it separately.
    pub fn escrow_for(pub_key: &PublicKey) -> Self {
        let digest = Blake2b256::digest(pub_key.as_bytes());
        Self(format!("{}{}", Self::ESCROW_PREFIX, hex::encode(digest)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
