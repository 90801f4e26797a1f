//! Delegator bond ledger, keyed by delegator address + candidate public key.

use crate::codec::{decode, encode};
use crate::keys::{delegator_bond_key, delegator_bonds_key};
use crate::{KvStore, StoreError};
use stake_types::{Address, DelegatorBond, PublicKey};

pub trait BondStore: KvStore {
    fn get_delegator_bond(
        &self,
        delegator: &Address,
        pub_key: &PublicKey,
    ) -> Result<Option<DelegatorBond>, StoreError> {
        match self.get(&delegator_bond_key(delegator, pub_key))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Persist a bond, adding its candidate to the delegator's index on first save.
    fn save_delegator_bond(&self, delegator: &Address, bond: &DelegatorBond) -> Result<(), StoreError> {
        let mut candidates = self.delegator_candidates(delegator)?;
        if !candidates.contains(&bond.pub_key) {
            candidates.push(bond.pub_key.clone());
            self.set(&delegator_bonds_key(delegator), &encode(&candidates)?)?;
        }
        self.set(&delegator_bond_key(delegator, &bond.pub_key), &encode(bond)?)
    }

    /// Prune a bond record (e.g. once its shares reach zero).
    fn remove_delegator_bond(&self, delegator: &Address, pub_key: &PublicKey) -> Result<(), StoreError> {
        let mut candidates = self.delegator_candidates(delegator)?;
        let before = candidates.len();
        candidates.retain(|pk| pk != pub_key);
        if candidates.len() != before {
            if candidates.is_empty() {
                self.delete(&delegator_bonds_key(delegator))?;
            } else {
                self.set(&delegator_bonds_key(delegator), &encode(&candidates)?)?;
            }
        }
        self.delete(&delegator_bond_key(delegator, pub_key))
    }

    /// Public keys of every candidate the delegator holds a bond with.
    fn delegator_candidates(&self, delegator: &Address) -> Result<Vec<PublicKey>, StoreError> {
        match self.get(&delegator_bonds_key(delegator))? {
            Some(bytes) => decode(&bytes),
            None => Ok(Vec::new()),
        }
    }
}

impl<S: KvStore + ?Sized> BondStore for S {}
