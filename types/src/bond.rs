//! Delegator bonds.

use crate::keys::PublicKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shares held by one delegator in one candidate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DelegatorBond {
    pub pub_key: PublicKey,
    pub shares: Decimal,
}

impl DelegatorBond {
    pub fn new(pub_key: PublicKey, shares: Decimal) -> Self {
        Self { pub_key, shares }
    }
}
