//! Validator-set derivation.
//!
//! Candidates are ranked by voting power (descending) with ties broken by
//! ascending public-key bytes, a total order every node computes identically.
//! Only the top `max_vals` keep their power; the validator set is the
//! nonzero prefix of that ranking. Changes are reported to consensus as a
//! sparse diff merged in public-key order.

use stake_store::{CandidateStore, KvStore, StoreError};
use stake_types::{Candidate, Params, Validator, ValidatorUpdate};
use std::cmp::Ordering;

/// Ranking order: voting power descending, then public key ascending.
pub fn rank_order(a: &Candidate, b: &Candidate) -> Ordering {
    b.voting_power
        .cmp(&a.voting_power)
        .then_with(|| a.pub_key.cmp(&b.pub_key))
}

/// Recompute voting power from shares and rank the result.
///
/// Candidates beyond rank `max_vals` are zeroed. The zeroed tail is ranked
/// again so the returned sequence is itself in rank order.
pub fn update_voting_power(candidates: Vec<Candidate>, params: &Params) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = candidates
        .into_iter()
        .map(|mut c| {
            c.voting_power = c.shares_power();
            c
        })
        .collect();
    ranked.sort_by(rank_order);

    let cap = usize::from(params.max_vals);
    let mut capped = false;
    for c in ranked.iter_mut().skip(cap) {
        if c.voting_power > 0 {
            c.voting_power = 0;
            capped = true;
        }
    }
    if capped {
        ranked.sort_by(rank_order);
    }
    ranked
}

/// The validator prefix of a ranked candidate list.
///
/// Stops at the first zero-power candidate, so a lone zero-power candidate
/// yields an empty set.
pub fn validators(ranked: &[Candidate]) -> Vec<Validator> {
    ranked
        .iter()
        .take_while(|c| c.voting_power > 0)
        .map(Candidate::validator)
        .collect()
}

/// Sparse diff between two validator sets.
///
/// Keys only in `old` are emitted with power 0, keys only in `new` with their
/// power, keys in both only when the power changed. Output is in public-key
/// order.
pub fn validators_changed(old: &[Validator], new: &[Validator]) -> Vec<ValidatorUpdate> {
    let mut old: Vec<&Validator> = old.iter().collect();
    let mut new: Vec<&Validator> = new.iter().collect();
    old.sort_by(|a, b| a.pub_key.cmp(&b.pub_key));
    new.sort_by(|a, b| a.pub_key.cmp(&b.pub_key));

    let mut changed = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        match old[i].pub_key.cmp(&new[j].pub_key) {
            Ordering::Less => {
                changed.push(ValidatorUpdate::removal(old[i].pub_key.clone()));
                i += 1;
            }
            Ordering::Greater => {
                changed.push(new[j].update());
                j += 1;
            }
            Ordering::Equal => {
                if old[i].voting_power != new[j].voting_power {
                    changed.push(new[j].update());
                }
                i += 1;
                j += 1;
            }
        }
    }
    changed.extend(
        old[i..]
            .iter()
            .map(|v| ValidatorUpdate::removal(v.pub_key.clone())),
    );
    changed.extend(new[j..].iter().map(|v| v.update()));
    changed
}

/// Sum of the voting power of a candidate list.
pub fn total_voting_power(candidates: &[Candidate]) -> Option<u64> {
    candidates
        .iter()
        .try_fold(0u64, |acc, c| acc.checked_add(c.voting_power))
}

/// Every stored candidate, ranked by its stored voting power.
pub fn load_ranked<S: KvStore + ?Sized>(store: &S) -> Result<Vec<Candidate>, StoreError> {
    let mut candidates = store.load_candidates()?;
    candidates.sort_by(rank_order);
    Ok(candidates)
}

/// Recompute voting power for every stored candidate, persist all of them
/// (zeroed ones included) and return the change relative to the previous set.
pub fn update_validator_set<S: KvStore + ?Sized>(
    store: &S,
    params: &Params,
) -> Result<Vec<ValidatorUpdate>, StoreError> {
    let before = load_ranked(store)?;
    let old = validators(&before);

    let after = update_voting_power(before, params);
    for candidate in &after {
        store.save_candidate(candidate)?;
    }
    let new = validators(&after);

    let diff = validators_changed(&old, &new);
    tracing::debug!(
        candidates = after.len(),
        validators = new.len(),
        changes = diff.len(),
        "validator set updated"
    );
    Ok(diff)
}
