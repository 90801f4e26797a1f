//! Read-only queries.
//!
//! Every answer carries the height of the last completed tick and, when the
//! backend can produce one, an inclusion proof for the underlying record.

use stake_store::codec::decode;
use stake_store::keys::{
    candidate_key, candidates_key, delegator_bond_key, delegator_bonds_key, service_key,
};
use stake_store::{KvStore, ParamsStore, StoreError};
use stake_types::{Address, Candidate, DelegatorBond, PublicKey, ServiceDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Queried<T> {
    pub value: T,
    pub height: u64,
    pub proof: Option<Vec<u8>>,
}

fn lookup<S, T>(store: &S, key: &[u8]) -> Result<Queried<Option<T>>, StoreError>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    let (bytes, proof) = store.get_with_proof(key)?;
    let value = bytes.as_deref().map(decode::<T>).transpose()?;
    Ok(Queried {
        value,
        height: store.last_height()?.unwrap_or(0),
        proof,
    })
}

/// Lists default to empty when their index has never been written.
fn lookup_list<S, T>(store: &S, key: &[u8]) -> Result<Queried<Vec<T>>, StoreError>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    let found = lookup::<S, Vec<T>>(store, key)?;
    Ok(Queried {
        value: found.value.unwrap_or_default(),
        height: found.height,
        proof: found.proof,
    })
}

pub fn candidate<S: KvStore + ?Sized>(
    store: &S,
    pub_key: &PublicKey,
) -> Result<Queried<Option<Candidate>>, StoreError> {
    lookup(store, &candidate_key(pub_key))
}

/// Public keys of every registered candidate.
pub fn candidates<S: KvStore + ?Sized>(store: &S) -> Result<Queried<Vec<PublicKey>>, StoreError> {
    lookup_list(store, &candidates_key())
}

pub fn delegator_bond<S: KvStore + ?Sized>(
    store: &S,
    delegator: &Address,
    pub_key: &PublicKey,
) -> Result<Queried<Option<DelegatorBond>>, StoreError> {
    lookup(store, &delegator_bond_key(delegator, pub_key))
}

/// Every candidate the delegator is bonded to.
pub fn delegator_candidates<S: KvStore + ?Sized>(
    store: &S,
    delegator: &Address,
) -> Result<Queried<Vec<PublicKey>>, StoreError> {
    lookup_list(store, &delegator_bonds_key(delegator))
}

pub fn service_definition<S: KvStore + ?Sized>(
    store: &S,
    name: &str,
) -> Result<Queried<Option<ServiceDefinition>>, StoreError> {
    lookup(store, &service_key(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stake_nullables::NullStore;
    use stake_store::{BondStore, CandidateStore, ServiceStore};

    #[test]
    fn test_candidate_queries() {
        let store = NullStore::new();
        let pk = PublicKey::new(vec![1]);
        store
            .save_candidate(&Candidate::new(pk.clone(), Address::new("owner")))
            .unwrap();
        store.set_last_height(12).unwrap();

        let found = candidate(&store, &pk).unwrap();
        assert_eq!(found.height, 12);
        assert_eq!(found.value.unwrap().pub_key, pk);
        assert!(found.proof.is_none());

        assert_eq!(candidates(&store).unwrap().value, vec![pk]);
        assert!(candidate(&store, &PublicKey::new(vec![2])).unwrap().value.is_none());
    }

    #[test]
    fn test_bond_queries() {
        let store = NullStore::new();
        let alice = Address::new("alice");
        let pk = PublicKey::new(vec![3]);
        assert!(delegator_candidates(&store, &alice).unwrap().value.is_empty());

        store
            .save_delegator_bond(&alice, &DelegatorBond::new(pk.clone(), dec!(4)))
            .unwrap();
        assert_eq!(delegator_bond(&store, &alice, &pk).unwrap().value.unwrap().shares, dec!(4));
        assert_eq!(delegator_candidates(&store, &alice).unwrap().value, vec![pk]);
        assert_eq!(delegator_candidates(&store, &alice).unwrap().height, 0);
    }

    #[test]
    fn test_service_query() {
        let store = NullStore::new();
        store
            .save_service_definition(&ServiceDefinition {
                name: "oracle".into(),
                description: "price feed".into(),
            })
            .unwrap();
        let found = service_definition(&store, "oracle").unwrap();
        assert_eq!(found.value.unwrap().description, "price feed");
        assert!(service_definition(&store, "missing").unwrap().value.is_none());
    }
}
