//! Settlement of matured unbonding requests.
//!
//! Bonded tokens were already debited from the delegator's bond when the
//! entry was queued. At release the coin value is computed from the
//! candidate's current exchange rate and paid out of its escrow account.

use crate::error::TickError;
use crate::PERIOD_UNBONDING;
use stake_store::{AccountTransfer, CandidateStore, KvStore, Queue};
use stake_types::decimal::checked_mul;
use stake_types::{to_coin_amount, Coins};

/// Pay out every unbond queued at or before `height - PERIOD_UNBONDING`.
///
/// Entries are released in insertion order and processing stops at the first
/// one that has not matured. Returns the number of entries released.
pub fn process_queue_unbond<S, B>(
    store: &S,
    bank: &mut B,
    bond_denom: &str,
    height: u64,
) -> Result<usize, TickError>
where
    S: KvStore + ?Sized,
    B: AccountTransfer + ?Sized,
{
    // Before the first period has elapsed nothing can be eligible.
    let Some(max_height_to_release) = height.checked_sub(PERIOD_UNBONDING) else {
        return Ok(0);
    };

    let queue = Queue::unbonding(store);
    let mut released = 0;
    while let Some(unbond) = queue.peek()? {
        if unbond.height_at_init > max_height_to_release {
            break;
        }
        queue.pop()?;

        let candidate = store
            .get_candidate(&unbond.delegatee)?
            .ok_or_else(|| TickError::MissingCandidate(unbond.delegatee.clone()))?;
        let value = checked_mul(unbond.bond_tokens, candidate.exchange_rate, "unbond payout")?;
        let payout = to_coin_amount(value, "unbond payout")?;

        tracing::debug!(
            candidate = %unbond.delegatee,
            account = %unbond.account,
            queued_at = unbond.height_at_init,
            payout,
            "releasing unbond"
        );
        if payout > 0 {
            bank.send_coins(
                &candidate.account,
                &unbond.account,
                &Coins::single(bond_denom, payout),
            )?;
        }
        released += 1;
    }
    Ok(released)
}
