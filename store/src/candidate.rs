//! Candidate registry.

use crate::codec::{decode, encode};
use crate::keys::{candidate_key, candidates_key};
use crate::{KvStore, StoreError};
use stake_types::{Candidate, PublicKey};

/// Candidate records keyed by public key, plus the index of all candidate keys.
pub trait CandidateStore: KvStore {
    fn get_candidate(&self, pub_key: &PublicKey) -> Result<Option<Candidate>, StoreError> {
        match self.get(&candidate_key(pub_key))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Persist a candidate, registering its key in the index on first save.
    fn save_candidate(&self, candidate: &Candidate) -> Result<(), StoreError> {
        let mut keys = self.candidate_keys()?;
        if !keys.contains(&candidate.pub_key) {
            keys.push(candidate.pub_key.clone());
            self.set(&candidates_key(), &encode(&keys)?)?;
        }
        self.set(&candidate_key(&candidate.pub_key), &encode(candidate)?)
    }

    fn candidate_keys(&self) -> Result<Vec<PublicKey>, StoreError> {
        match self.get(&candidates_key())? {
            Some(bytes) => decode(&bytes),
            None => Ok(Vec::new()),
        }
    }

    /// Load every indexed candidate, in index order.
    ///
    /// An indexed key without a record means the registry is corrupted; this
    /// is reported rather than skipped so no caller ever works from a partial set.
    fn load_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        self.candidate_keys()?
            .iter()
            .map(|pk| {
                self.get_candidate(pk)?.ok_or_else(|| {
                    StoreError::Corruption(format!("indexed candidate {} has no record", pk))
                })
            })
            .collect()
    }
}

impl<S: KvStore + ?Sized> CandidateStore for S {}
