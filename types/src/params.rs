//! Staking parameters, the process-wide configuration singleton.
//!
//! Initialised once at genesis. The pool totals are bookkeeping maintained
//! by the transaction handlers; `inflation` is adjusted once per block.

use crate::address::Address;
use crate::decimal::fraction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // ── Pool accounting ──────────────────────────────────────────────────
    /// Sum of all candidates' global-pool shares.
    pub issued_global_stake_shares: u64,
    /// Total supply of the bond denomination.
    pub total_supply: u64,
    /// Reserve of all bonded tokens.
    pub bonded_pool: u64,
    /// Reserve of unbonded tokens held with candidates.
    pub unbonded_pool: u64,
    /// Account where all bonded coins are held.
    pub hold_bonded: Address,
    /// Account where delegated but unbonded coins are held.
    pub hold_unbonded: Address,

    // ── Inflation ────────────────────────────────────────────────────────
    /// Current annual inflation rate.
    pub inflation: Decimal,
    /// Maximum annual change in the inflation rate.
    pub inflation_rate_change: Decimal,
    pub inflation_max: Decimal,
    pub inflation_min: Decimal,
    /// Target fraction of the supply that is bonded.
    pub goal_bonded: Decimal,
    /// Blocks per year; converts the annual rates into per-block rates.
    pub blocks_per_year: u64,

    // ── Validator set ────────────────────────────────────────────────────
    /// Maximum number of validators.
    pub max_vals: u16,
    /// Bondable coin denomination.
    pub allowed_bond_denom: String,

    // ── Gas costs ────────────────────────────────────────────────────────
    pub gas_declare_candidacy: u64,
    pub gas_edit_candidacy: u64,
    pub gas_delegate: u64,
    pub gas_unbond: u64,
}

impl Params {
    /// Genesis defaults.
    pub fn genesis_defaults() -> Self {
        Self {
            issued_global_stake_shares: 0,
            total_supply: 0,
            bonded_pool: 0,
            unbonded_pool: 0,
            hold_bonded: Address::new("stake/hold_bonded"),
            hold_unbonded: Address::new("stake/hold_unbonded"),
            inflation: fraction(7, 100),
            inflation_rate_change: fraction(13, 100),
            inflation_max: fraction(20, 100),
            inflation_min: fraction(7, 100),
            goal_bonded: fraction(67, 100),
            blocks_per_year: 6_311_520, // ~5s blocks
            max_vals: 100,
            allowed_bond_denom: "fermion".to_string(),
            gas_declare_candidacy: 20,
            gas_edit_candidacy: 20,
            gas_delegate: 20,
            gas_unbond: 20,
        }
    }

    /// Fraction of the annual inflation minted per block.
    ///
    /// Zero when `blocks_per_year` is zero (rewards disabled).
    pub fn inflation_per_reward(&self) -> Decimal {
        if self.blocks_per_year == 0 {
            return Decimal::ZERO;
        }
        self.inflation / Decimal::from(self.blocks_per_year)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::genesis_defaults()
    }
}
