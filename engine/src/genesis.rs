//! Genesis state.

use crate::error::TickError;
use crate::validator_set::update_validator_set;
use stake_store::{
    AccountTransfer, BondStore, CandidateStore, KvBank, KvStore, ParamsStore, WriteBatch,
};
use stake_types::{
    to_coin_amount, Address, ArithmeticError, Candidate, Coins, Decimal, DelegatorBond,
    Description, Params, PublicKey, ValidatorUpdate,
};
use std::collections::BTreeSet;

/// A candidate bonded at genesis with a self-delegation of `shares`.
#[derive(Clone, Debug, PartialEq)]
pub struct GenesisCandidate {
    pub pub_key: PublicKey,
    pub owner: Address,
    pub shares: Decimal,
    pub commission: Decimal,
    pub description: Description,
}

/// Write the genesis params and candidates and derive the initial set.
///
/// Each candidate's bond is minted into its escrow account at an exchange
/// rate of 1 and counted in the supply and the bonded pool. Returns the
/// initial validator set as a diff against the empty set.
pub fn init_genesis<S, B>(
    store: &S,
    bank: &mut B,
    params: &Params,
    candidates: &[GenesisCandidate],
) -> Result<Vec<ValidatorUpdate>, TickError>
where
    S: KvStore + ?Sized,
    B: AccountTransfer + ?Sized,
{
    check_unique(candidates)?;
    let batch = WriteBatch::new(store);
    let (diff, params) = write_genesis(&batch, bank, params, candidates)?;
    batch.commit()?;
    log_genesis(candidates.len(), &diff, &params);
    Ok(diff)
}

/// [`init_genesis`] with the escrow balances kept in `store` through a
/// [`KvBank`], committed together with the stake state.
pub fn init_genesis_with_kv_bank<S>(
    store: &S,
    params: &Params,
    candidates: &[GenesisCandidate],
) -> Result<Vec<ValidatorUpdate>, TickError>
where
    S: KvStore + ?Sized,
{
    check_unique(candidates)?;
    let batch = WriteBatch::new(store);
    let mut bank = KvBank::new(&batch);
    let (diff, params) = write_genesis(&batch, &mut bank, params, candidates)?;
    batch.commit()?;
    log_genesis(candidates.len(), &diff, &params);
    Ok(diff)
}

fn check_unique(candidates: &[GenesisCandidate]) -> Result<(), TickError> {
    let mut seen = BTreeSet::new();
    for genesis in candidates {
        if !seen.insert(&genesis.pub_key) {
            return Err(TickError::DuplicateGenesisCandidate(genesis.pub_key.clone()));
        }
    }
    Ok(())
}

fn write_genesis<S, B>(
    batch: &WriteBatch<'_, S>,
    bank: &mut B,
    params: &Params,
    candidates: &[GenesisCandidate],
) -> Result<(Vec<ValidatorUpdate>, Params), TickError>
where
    S: KvStore + ?Sized,
    B: AccountTransfer + ?Sized,
{
    let mut params = params.clone();
    for genesis in candidates {
        let mut candidate = Candidate::new(genesis.pub_key.clone(), genesis.owner.clone());
        candidate.shares = genesis.shares;
        candidate.delegator_shares = genesis.shares;
        candidate.global_pool_shares = genesis.shares;
        candidate.commission = genesis.commission;
        candidate.description = genesis.description.clone();

        let bonded = to_coin_amount(genesis.shares, "genesis bond")?;
        if bonded > 0 {
            bank.credit_account(
                &candidate.account,
                &Coins::single(params.allowed_bond_denom.as_str(), bonded),
            )?;
        }
        params.total_supply = params
            .total_supply
            .checked_add(bonded)
            .ok_or(ArithmeticError::Overflow("total supply"))?;
        params.bonded_pool = params
            .bonded_pool
            .checked_add(bonded)
            .ok_or(ArithmeticError::Overflow("bonded pool"))?;
        params.issued_global_stake_shares = params
            .issued_global_stake_shares
            .checked_add(bonded)
            .ok_or(ArithmeticError::Overflow("global stake shares"))?;

        batch.save_candidate(&candidate)?;
        batch.save_delegator_bond(
            &candidate.owner,
            &DelegatorBond::new(candidate.pub_key.clone(), genesis.shares),
        )?;
    }

    batch.save_params(&params)?;
    let diff = update_validator_set(batch, &params)?;
    batch.set_last_height(0)?;
    Ok((diff, params))
}

fn log_genesis(candidates: usize, diff: &[ValidatorUpdate], params: &Params) {
    tracing::info!(
        candidates,
        validators = diff.len(),
        supply = params.total_supply,
        "genesis written"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stake_nullables::{NullBank, NullStore};

    fn genesis(key: u8, shares: Decimal) -> GenesisCandidate {
        GenesisCandidate {
            pub_key: PublicKey::new(vec![key]),
            owner: Address::new(format!("owner{key}")),
            shares,
            commission: dec!(0.1),
            description: Description::default(),
        }
    }

    #[test]
    fn test_genesis_mints_bonds() {
        let store = NullStore::new();
        let mut bank = NullBank::new();
        let params = Params {
            total_supply: 500,
            ..Params::default()
        };

        let diff = init_genesis(
            &store,
            &mut bank,
            &params,
            &[genesis(1, dec!(100)), genesis(2, dec!(0))],
        )
        .unwrap();

        assert_eq!(diff, vec![ValidatorUpdate { pub_key: PublicKey::new(vec![1]), power: 100 }]);
        let stored = store.load_params().unwrap();
        assert_eq!(stored.total_supply, 600);
        assert_eq!(stored.bonded_pool, 100);
        assert_eq!(store.last_height().unwrap(), Some(0));
        assert_eq!(bank.minted("fermion"), 100);

        let owner = Address::new("owner1");
        let bond = store.get_delegator_bond(&owner, &PublicKey::new(vec![1])).unwrap().unwrap();
        assert_eq!(bond.shares, dec!(100));
    }

    #[test]
    fn test_duplicate_candidate_rejected() {
        let store = NullStore::new();
        let mut bank = NullBank::new();
        let err = init_genesis(
            &store,
            &mut bank,
            &Params::default(),
            &[genesis(1, dec!(1)), genesis(1, dec!(2))],
        )
        .unwrap_err();
        assert!(matches!(err, TickError::DuplicateGenesisCandidate(_)));
        assert!(store.is_empty());
        assert!(bank.transfers().is_empty());
    }

    #[test]
    fn test_genesis_balances_commit_with_state() {
        let store = NullStore::new();
        let diff =
            init_genesis_with_kv_bank(&store, &Params::default(), &[genesis(1, dec!(100))]).unwrap();
        assert_eq!(diff.len(), 1);

        let escrow = Address::escrow_for(&PublicKey::new(vec![1]));
        let balance = KvBank::new(&store).balance(&escrow).unwrap();
        assert_eq!(balance.get("fermion"), Some(&100));
        assert_eq!(store.load_params().unwrap().bonded_pool, 100);
    }

    #[test]
    fn test_failed_genesis_writes_no_balances() {
        let store = NullStore::new();
        // the second bond does not fit a coin amount, after the first was credited
        let err = init_genesis_with_kv_bank(
            &store,
            &Params::default(),
            &[genesis(1, dec!(100)), genesis(2, Decimal::MAX)],
        )
        .unwrap_err();
        assert!(matches!(err, TickError::Arithmetic(_)));
        assert!(store.is_empty());
    }
}
