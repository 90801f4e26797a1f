//! Per-block tick.
//!
//! Order within one block:
//! 1. release matured unbonds
//! 2. expire commission history
//! 3. recompute voting power and diff the validator set
//! 4. distribute rewards over the new set
//! 5. adjust inflation
//! 6. record the height
//!
//! Every store write goes through a [`WriteBatch`] that is committed only
//! when all steps succeed, so a failed tick leaves the store untouched.
//! Coin movements go through the caller's [`AccountTransfer`] and are not
//! covered by the batch, except in [`tick_with_kv_bank`] where the balances
//! live in the same store and are written through the same batch.

use crate::commission::process_queue_comm_history;
use crate::error::TickError;
use crate::inflation::next_inflation;
use crate::rewards::process_validator_rewards;
use crate::unbonding::process_queue_unbond;
use crate::validator_set::{total_voting_power, update_validator_set};
use stake_store::{AccountTransfer, CandidateStore, KvBank, KvStore, ParamsStore, WriteBatch};
use stake_types::{ArithmeticError, Decimal, ValidatorUpdate};

/// Result of one tick, for logging and for the consensus engine.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    pub height: u64,
    /// Validator-set changes to report to consensus.
    pub diff: Vec<ValidatorUpdate>,
    pub unbonds_released: usize,
    pub commission_purged: usize,
    pub minted: u64,
    pub inflation: Decimal,
}

/// Run the tick for `height` and commit its writes.
pub fn tick<S, B>(store: &S, bank: &mut B, height: u64) -> Result<TickOutcome, TickError>
where
    S: KvStore + ?Sized,
    B: AccountTransfer + ?Sized,
{
    let batch = WriteBatch::new(store);
    let outcome = run(&batch, bank, height)?;
    commit(batch, outcome)
}

/// Run the tick for `height` with a [`KvBank`] kept in `store`.
///
/// Balance updates share the tick's batch, so a failed tick pays nothing
/// and a replay of the block cannot release an unbond twice.
pub fn tick_with_kv_bank<S>(store: &S, height: u64) -> Result<TickOutcome, TickError>
where
    S: KvStore + ?Sized,
{
    let batch = WriteBatch::new(store);
    let mut bank = KvBank::new(&batch);
    let outcome = run(&batch, &mut bank, height)?;
    commit(batch, outcome)
}

fn commit<S: KvStore + ?Sized>(
    batch: WriteBatch<'_, S>,
    outcome: TickOutcome,
) -> Result<TickOutcome, TickError> {
    let writes = batch.commit()?;
    tracing::info!(
        height = outcome.height,
        changes = outcome.diff.len(),
        released = outcome.unbonds_released,
        purged = outcome.commission_purged,
        minted = outcome.minted,
        inflation = %outcome.inflation,
        writes,
        "tick complete"
    );
    Ok(outcome)
}

fn run<S, B>(store: &S, bank: &mut B, height: u64) -> Result<TickOutcome, TickError>
where
    S: KvStore + ?Sized,
    B: AccountTransfer + ?Sized,
{
    let params = store.load_params()?;

    let unbonds_released = process_queue_unbond(store, bank, &params.allowed_bond_denom, height)?;
    let commission_purged = process_queue_comm_history(store, height)?;

    let diff = update_validator_set(store, &params)?;
    let total_power = total_voting_power(&store.load_candidates()?)
        .ok_or(ArithmeticError::Overflow("total voting power"))?;

    let rewards = process_validator_rewards(bank, store, total_power)?;

    // rewards changed the supply, so reload before adjusting inflation
    let mut params = store.load_params()?;
    params.inflation = next_inflation(&params)?;
    store.save_params(&params)?;
    store.set_last_height(height)?;

    Ok(TickOutcome {
        height,
        diff,
        unbonds_released,
        commission_purged,
        minted: rewards.minted,
        inflation: params.inflation,
    })
}
