//! Staking engine: the per-block maintenance of the staking state.
//!
//! ## Module overview
//!
//! - [`validator_set`]: voting-power ranking, the capped validator set and its diff.
//! - [`unbonding`]: payout of matured unbonding requests.
//! - [`commission`]: retention window of commission-change history.
//! - [`rewards`]: inflationary rewards and commission settlement.
//! - [`inflation`]: per-block inflation adjustment.
//! - [`tick`]: orchestration of one block, committed atomically.
//! - [`query`]: read-only lookups with height and proof.
//! - [`genesis`]: initial params and candidates.

pub mod commission;
pub mod error;
pub mod genesis;
pub mod inflation;
pub mod query;
pub mod rewards;
pub mod tick;
pub mod unbonding;
pub mod validator_set;

pub use error::{StakeError, TickError};
pub use genesis::{init_genesis, init_genesis_with_kv_bank, GenesisCandidate};
pub use query::Queried;
pub use rewards::RewardSummary;
pub use tick::{tick, tick_with_kv_bank, TickOutcome};
pub use validator_set::{update_validator_set, update_voting_power, validators, validators_changed};

use stake_store::{AccountTransfer, KvStore, ParamsStore};
use stake_transactions::{validate_bond_denom, Tx};

/// Blocks an unbond waits before it is paid out.
pub const PERIOD_UNBONDING: u64 = 30;
/// Blocks a commission change stays in the history queue.
pub const PERIOD_COMM_HISTORY: u64 = 28;

/// Entry point used by the host: transaction pre-checks and the per-block tick
/// over one store handle.
pub struct StakeModule<S> {
    store: S,
}

impl<S: KvStore> StakeModule<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stateless checks plus the bondable denomination from the stored params.
    pub fn check_tx(&self, tx: &Tx) -> Result<(), StakeError> {
        tx.validate_basic()?;
        let params = self.store.load_params()?;
        validate_bond_denom(tx, &params)?;
        Ok(())
    }

    pub fn tick<B: AccountTransfer + ?Sized>(
        &self,
        bank: &mut B,
        height: u64,
    ) -> Result<TickOutcome, StakeError> {
        tick::tick(&self.store, bank, height).map_err(|e| fatal(height, e))
    }

    /// Tick with balances kept in the module's own store, committed atomically
    /// with the stake state.
    pub fn tick_with_kv_bank(&self, height: u64) -> Result<TickOutcome, StakeError> {
        tick::tick_with_kv_bank(&self.store, height).map_err(|e| fatal(height, e))
    }
}

fn fatal(height: u64, error: TickError) -> StakeError {
    tracing::error!(height, error = %error, "tick failed");
    StakeError::Fatal(error)
}
