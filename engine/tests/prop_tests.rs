use proptest::prelude::*;
use rust_decimal_macros::dec;

use stake_engine::commission::process_queue_comm_history;
use stake_engine::rewards::{commission_split, process_validator_rewards, reward_per_power};
use stake_engine::unbonding::process_queue_unbond;
use stake_engine::validator_set::{rank_order, validators_changed};
use stake_engine::{update_validator_set, update_voting_power, PERIOD_COMM_HISTORY, PERIOD_UNBONDING};
use stake_nullables::{NullBank, NullStore};
use stake_store::{CandidateStore, ParamsStore, Queue};
use stake_types::{
    Address, Candidate, Decimal, Params, PublicKey, QueueElemModComm, QueueElemUnbond, Validator,
};
use std::collections::BTreeMap;

fn candidates_from(entries: &BTreeMap<u8, u32>) -> Vec<Candidate> {
    entries
        .iter()
        .map(|(key, shares)| {
            let mut c = Candidate::new(PublicKey::new(vec![*key]), Address::new(format!("o{key}")));
            c.shares = Decimal::from(*shares);
            c
        })
        .collect()
}

fn validator_set(entries: &BTreeMap<u8, u32>) -> Vec<Validator> {
    candidates_from(entries)
        .into_iter()
        .filter(|c| !c.shares.is_zero())
        .map(|mut c| {
            c.voting_power = c.shares_power();
            c.validator()
        })
        .collect()
}

proptest! {
    /// Output is ranked and ranking it again changes nothing.
    #[test]
    fn voting_power_output_is_ranked(
        entries in prop::collection::btree_map(any::<u8>(), 0u32..1000, 0..30),
        max_vals in 0u16..40,
    ) {
        let params = Params { max_vals, ..Params::default() };
        let ranked = update_voting_power(candidates_from(&entries), &params);
        for pair in ranked.windows(2) {
            prop_assert_eq!(rank_order(&pair[0], &pair[1]), std::cmp::Ordering::Less);
        }
        let mut resorted = ranked.clone();
        resorted.sort_by(rank_order);
        prop_assert_eq!(resorted, ranked);
    }

    /// Nothing past rank `max_vals` keeps any power.
    #[test]
    fn cap_is_enforced(
        entries in prop::collection::btree_map(any::<u8>(), 0u32..1000, 0..30),
        max_vals in 0u16..10,
    ) {
        let params = Params { max_vals, ..Params::default() };
        let ranked = update_voting_power(candidates_from(&entries), &params);
        let powered = ranked.iter().filter(|c| c.voting_power > 0).count();
        prop_assert!(powered <= usize::from(max_vals));
        for c in ranked.iter().skip(usize::from(max_vals)) {
            prop_assert_eq!(c.voting_power, 0);
        }
    }

    /// The diff holds exactly the keys whose power differs between the sets.
    #[test]
    fn diff_is_minimal_and_complete(
        old in prop::collection::btree_map(any::<u8>(), 0u32..5, 0..20),
        new in prop::collection::btree_map(any::<u8>(), 0u32..5, 0..20),
    ) {
        let old_set = validator_set(&old);
        let new_set = validator_set(&new);
        let diff = validators_changed(&old_set, &new_set);

        let power = |set: &[Validator], key: &PublicKey| {
            set.iter().find(|v| &v.pub_key == key).map_or(0, |v| v.voting_power)
        };
        let mut expected = Vec::new();
        for key in old.keys().chain(new.keys()) {
            let pk = PublicKey::new(vec![*key]);
            let (before, after) = (power(&old_set, &pk), power(&new_set, &pk));
            if before != after && !expected.iter().any(|(k, _)| k == &pk) {
                expected.push((pk, after));
            }
        }
        expected.sort();
        let got: Vec<(PublicKey, u64)> = diff.into_iter().map(|u| (u.pub_key, u.power)).collect();
        prop_assert_eq!(got, expected);
    }

    /// Only entries at least `PERIOD_UNBONDING` old are released, in order.
    #[test]
    fn unbond_queue_respects_delay(
        gaps in prop::collection::vec(0u64..5, 1..10),
        at in 0u64..80,
    ) {
        let store = NullStore::new();
        let mut c = Candidate::new(PublicKey::new(vec![1]), Address::new("owner"));
        c.shares = dec!(1000);
        store.save_candidate(&c).unwrap();
        let mut bank = NullBank::new();
        bank.fund(&c.account, "fermion", 1_000_000);

        let mut height = 0;
        let mut heights = Vec::new();
        for gap in gaps {
            height += gap;
            heights.push(height);
            Queue::unbonding(&store).push(&QueueElemUnbond {
                delegatee: c.pub_key.clone(),
                account: Address::new("leaver"),
                bond_tokens: dec!(1),
                height_at_init: height,
            }).unwrap();
        }

        let released = process_queue_unbond(&store, &mut bank, "fermion", at).unwrap();
        let eligible = heights.iter().filter(|h| **h + PERIOD_UNBONDING <= at).count();
        prop_assert_eq!(released, eligible);
        prop_assert_eq!(bank.balance_of(&Address::new("leaver"), "fermion"), eligible as u64);
    }

    /// Commission history keeps exactly the entries inside the window.
    #[test]
    fn commission_history_window(
        heights in prop::collection::vec(0u64..100, 0..10),
        at in 0u64..150,
    ) {
        let mut heights = heights;
        heights.sort();
        let store = NullStore::new();
        for h in &heights {
            Queue::commission_history(&store).push(&QueueElemModComm {
                delegatee: PublicKey::new(vec![1]),
                height_at_init: *h,
            }).unwrap();
        }
        let purged = process_queue_comm_history(&store, at).unwrap();
        let expired = heights
            .iter()
            .filter(|h| at.saturating_sub(**h) > PERIOD_COMM_HISTORY)
            .count();
        prop_assert_eq!(purged, expired);
    }

    /// Supply grows by exactly what was minted, and the minted total is
    /// `reward_per_power × total power` up to one coin per validator.
    #[test]
    fn rewards_conserve_supply(
        entries in prop::collection::btree_map(1u8..255, 1u32..100_000, 1..10),
        supply in 1_000_000u64..1_000_000_000,
    ) {
        let store = NullStore::new();
        let params = Params { total_supply: supply, blocks_per_year: 1_000, ..Params::default() };
        store.save_params(&params).unwrap();
        for c in candidates_from(&entries) {
            store.save_candidate(&c).unwrap();
        }
        update_validator_set(&store, &params).unwrap();
        let total: u64 = store.load_candidates().unwrap().iter().map(|c| c.voting_power).sum();

        let mut bank = NullBank::new();
        let summary = process_validator_rewards(&mut bank, &store, total).unwrap();
        prop_assert_eq!(store.load_params().unwrap().total_supply, supply + summary.minted);
        prop_assert_eq!(bank.minted("fermion"), summary.minted);

        let exact = reward_per_power(&params, total).unwrap() * Decimal::from(total);
        let minted = Decimal::from(summary.minted);
        // per-validator products may round in the last digit
        prop_assert!(minted <= exact + dec!(0.000001));
        prop_assert!(exact - minted < Decimal::from(entries.len()));
    }

    /// Positive commission with outside delegators mints self-bond shares;
    /// zero commission mints none.
    #[test]
    fn commission_monotonic(
        shares in 10u32..1_000_000,
        self_pct in 0u32..100,
        reward in 1u32..100_000,
        commission_pct in 0u32..100,
    ) {
        let mut c = Candidate::new(PublicKey::new(vec![1]), Address::new("owner"));
        c.shares = Decimal::from(shares);
        c.commission = Decimal::from(commission_pct) / Decimal::from(100);
        let self_shares = Decimal::from(shares) * Decimal::from(self_pct) / Decimal::from(100);

        let split = commission_split(&c, self_shares, Decimal::from(reward)).unwrap();
        if commission_pct == 0 {
            prop_assert_eq!(split.commission_shares, Decimal::ZERO);
        } else {
            prop_assert!(split.commission_shares > Decimal::ZERO);
        }
        prop_assert!(split.exchange_rate >= Decimal::ONE);
    }
}
