use rust_decimal_macros::dec;

use stake_engine::{tick, update_validator_set, update_voting_power, validators, PERIOD_UNBONDING};
use stake_nullables::{NullBank, NullStore};
use stake_store::{BondStore, CandidateStore, ParamsStore, Queue};
use stake_types::{
    Address, Candidate, Decimal, DelegatorBond, Params, PublicKey, QueueElemUnbond, ValidatorUpdate,
};

fn candidate(key: u8, shares: Decimal) -> Candidate {
    let mut c = Candidate::new(PublicKey::new(vec![key]), Address::new(format!("owner{key}")));
    c.shares = shares;
    c.delegator_shares = shares;
    c
}

fn single_seat() -> Params {
    Params {
        max_vals: 1,
        ..Params::default()
    }
}

#[test]
fn two_candidates_one_seat() {
    let a = candidate(0xA, dec!(100));
    let b = candidate(0xB, dec!(50));

    let ranked = update_voting_power(vec![b.clone(), a.clone()], &single_seat());
    assert_eq!(ranked[0].pub_key, a.pub_key);
    assert_eq!(ranked[0].voting_power, 100);
    assert_eq!(ranked[1].voting_power, 0);

    let vals = validators(&ranked);
    assert_eq!(vals.len(), 1);
    assert_eq!(vals[0].pub_key, a.pub_key);
}

#[test]
fn overtaking_candidate_swaps_the_seat() {
    let store = NullStore::new();
    let a = candidate(0xA, dec!(100));
    let mut b = candidate(0xB, dec!(50));
    store.save_candidate(&a).unwrap();
    store.save_candidate(&b).unwrap();

    let first = update_validator_set(&store, &single_seat()).unwrap();
    assert_eq!(first, vec![ValidatorUpdate { pub_key: a.pub_key.clone(), power: 100 }]);

    b.shares = dec!(200);
    store.save_candidate(&b).unwrap();
    let mut diff = update_validator_set(&store, &single_seat()).unwrap();
    diff.sort_by(|x, y| y.power.cmp(&x.power));
    assert_eq!(
        diff,
        vec![
            ValidatorUpdate { pub_key: b.pub_key.clone(), power: 200 },
            ValidatorUpdate::removal(a.pub_key.clone()),
        ]
    );
}

#[test]
fn unbond_pays_out_after_rewards_raised_the_rate() {
    let store = NullStore::new();
    let mut bank = NullBank::new();
    store
        .save_params(&Params {
            total_supply: 100_000,
            blocks_per_year: 1_000,
            ..Params::default()
        })
        .unwrap();
    let c = candidate(1, dec!(1000));
    store.save_candidate(&c).unwrap();
    store
        .save_delegator_bond(&c.owner, &DelegatorBond::new(c.pub_key.clone(), dec!(1000)))
        .unwrap();
    bank.fund(&c.account, "fermion", 1000);

    // a delegator leaves half the shares at height 1
    Queue::unbonding(&store)
        .push(&QueueElemUnbond {
            delegatee: c.pub_key.clone(),
            account: Address::new("leaver"),
            bond_tokens: dec!(500),
            height_at_init: 1,
        })
        .unwrap();

    let mut minted = 0;
    for height in 1..=PERIOD_UNBONDING {
        let outcome = tick(&store, &mut bank, height).unwrap();
        assert_eq!(outcome.unbonds_released, 0);
        minted += outcome.minted;
    }
    let release = tick(&store, &mut bank, PERIOD_UNBONDING + 1).unwrap();
    assert_eq!(release.unbonds_released, 1);

    let paid = bank.balance_of(&Address::new("leaver"), "fermion");
    assert!(paid > 500, "payout {paid} should include accrued rewards");
    assert!(paid <= 500 + minted);
    assert_eq!(store.last_height().unwrap(), Some(PERIOD_UNBONDING + 1));
}
