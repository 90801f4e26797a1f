//! Entries of the two time-delayed queues.

use crate::address::Address;
use crate::keys::PublicKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pending unbonding payout.
///
/// `bond_tokens` were already debited from the delegator's bond when the
/// entry was queued; the coin payout is computed at release time from the
/// candidate's exchange rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueueElemUnbond {
    pub delegatee: PublicKey,
    /// Account the payout is sent to.
    pub account: Address,
    pub bond_tokens: Decimal,
    pub height_at_init: u64,
}

/// A commission-rate change, kept for the retention window only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueElemModComm {
    pub delegatee: PublicKey,
    pub height_at_init: u64,
}
