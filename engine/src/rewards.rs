//! Inflationary reward distribution.
//!
//! Each validator is minted `voting_power × reward_per_power` coins into its
//! escrow account, which raises the coin value of every share. The part of
//! the reward earned by other delegators is subject to the candidate's
//! commission, which is paid as new self-bond shares rather than coins:
//!
//! ```text
//! rate × (tok1 + x) = coins2
//! rate × tok1       = coins2 − comm
//! ⇒ x = coins2 · tok1 / (coins2 − comm) − tok1
//! ```
//!
//! so commission compounds at the same exchange rate as any delegation.

use crate::error::TickError;
use crate::validator_set::load_ranked;
use stake_store::{AccountTransfer, BondStore, CandidateStore, KvStore, ParamsStore};
use stake_types::decimal::{checked_add, checked_div, checked_mul, checked_sub};
use stake_types::{to_coin_amount, ArithmeticError, Candidate, Coins, Decimal, DelegatorBond, Params};

/// What one reward pass minted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewardSummary {
    pub minted: u64,
    pub rewarded: usize,
}

/// Coins minted per unit of voting power this block.
pub fn reward_per_power(params: &Params, total_voting_power: u64) -> Result<Decimal, ArithmeticError> {
    let supply_per_power = checked_div(
        Decimal::from(params.total_supply),
        Decimal::from(total_voting_power),
        "reward per power",
    )?;
    checked_mul(supply_per_power, params.inflation_per_reward(), "reward per power")
}

/// Commission-adjusted share accounting for one validator.
#[derive(Clone, Debug, PartialEq)]
pub struct CommissionSplit {
    /// New self-bond shares paid as commission.
    pub commission_shares: Decimal,
    /// Exchange rate after the reward and commission shares.
    pub exchange_rate: Decimal,
}

/// Split a reward between the candidate's delegators and its commission.
///
/// `self_shares` is the candidate's own bond before the reward.
pub fn commission_split(
    candidate: &Candidate,
    self_shares: Decimal,
    reward: Decimal,
) -> Result<CommissionSplit, ArithmeticError> {
    let tok1 = candidate.shares;
    let coins1 = checked_mul(tok1, candidate.exchange_rate, "bonded coins")?;
    let coins2 = checked_add(coins1, reward, "bonded coins")?;

    let others = checked_sub(tok1, self_shares, "delegator shares")?;
    if others.is_sign_negative() && !others.is_zero() {
        return Err(ArithmeticError::Negative("delegator shares"));
    }
    let others_fraction = checked_div(others, tok1, "delegator fraction")?;
    let pre_rewards_del = checked_mul(reward, others_fraction, "delegator reward")?;
    let comm_coin = checked_mul(pre_rewards_del, candidate.commission, "commission")?;

    let commission_shares = if comm_coin.is_zero() {
        Decimal::ZERO
    } else {
        let scaled = checked_mul(coins2, tok1, "commission shares")?;
        let net = checked_sub(coins2, comm_coin, "commission shares")?;
        checked_sub(checked_div(scaled, net, "commission shares")?, tok1, "commission shares")?
    };
    let new_shares = checked_add(tok1, commission_shares, "candidate shares")?;
    let exchange_rate = checked_div(coins2, new_shares, "exchange rate")?;

    Ok(CommissionSplit {
        commission_shares,
        exchange_rate,
    })
}

/// Mint this block's rewards for every validator and settle commission.
///
/// Voting power must already be final for the block; `total_voting_power`
/// is the sum over the updated set. Rewards are minted into the bonded
/// escrow accounts, so the minted total is added to both the supply and
/// the bonded pool recorded in the params.
pub fn process_validator_rewards<S, B>(
    bank: &mut B,
    store: &S,
    total_voting_power: u64,
) -> Result<RewardSummary, TickError>
where
    S: KvStore + ?Sized,
    B: AccountTransfer + ?Sized,
{
    let mut params = store.load_params()?;
    if total_voting_power == 0 {
        tracing::warn!(supply = params.total_supply, "no voting power bonded, skipping rewards");
        return Ok(RewardSummary::default());
    }
    let per_power = reward_per_power(&params, total_voting_power)?;

    let mut summary = RewardSummary::default();
    for mut validator in load_ranked(store)? {
        // ranked, so every later candidate has zero power too
        if validator.voting_power == 0 {
            break;
        }
        let reward_value = checked_mul(Decimal::from(validator.voting_power), per_power, "reward")?;
        let reward = to_coin_amount(reward_value, "reward")?;
        if reward == 0 {
            continue;
        }

        bank.credit_account(
            &validator.account,
            &Coins::single(params.allowed_bond_denom.as_str(), reward),
        )?;
        params.total_supply = params
            .total_supply
            .checked_add(reward)
            .ok_or(ArithmeticError::Overflow("total supply"))?;
        params.bonded_pool = params
            .bonded_pool
            .checked_add(reward)
            .ok_or(ArithmeticError::Overflow("bonded pool"))?;
        summary.minted = summary
            .minted
            .checked_add(reward)
            .ok_or(ArithmeticError::Overflow("minted"))?;
        summary.rewarded += 1;

        let self_bond = store.get_delegator_bond(&validator.owner, &validator.pub_key)?;
        let self_shares = self_bond.as_ref().map_or(Decimal::ZERO, |b| b.shares);
        let split = commission_split(&validator, self_shares, Decimal::from(reward))?;

        tracing::debug!(
            validator = %validator.pub_key,
            power = validator.voting_power,
            reward,
            commission_shares = %split.commission_shares,
            exchange_rate = %split.exchange_rate,
            "validator rewarded"
        );

        validator.shares = checked_add(validator.shares, split.commission_shares, "candidate shares")?;
        validator.delegator_shares = checked_add(
            validator.delegator_shares,
            split.commission_shares,
            "delegator shares",
        )?;
        validator.exchange_rate = split.exchange_rate;
        store.save_candidate(&validator)?;

        if !split.commission_shares.is_zero() {
            let bond = match self_bond {
                Some(mut bond) => {
                    bond.shares = checked_add(bond.shares, split.commission_shares, "self bond")?;
                    bond
                }
                None => DelegatorBond::new(validator.pub_key.clone(), split.commission_shares),
            };
            store.save_delegator_bond(&validator.owner, &bond)?;
        }
    }

    store.save_params(&params)?;
    Ok(summary)
}
