//! Params singleton and the last processed block height.

use crate::codec::{decode, encode};
use crate::keys::{height_key, params_key};
use crate::{KvStore, StoreError};
use stake_types::Params;

pub trait ParamsStore: KvStore {
    /// Params are written once at genesis; their absence afterwards is an error.
    fn load_params(&self) -> Result<Params, StoreError> {
        match self.get(&params_key())? {
            Some(bytes) => decode(&bytes),
            None => Err(StoreError::NotFound("params".into())),
        }
    }

    fn save_params(&self, params: &Params) -> Result<(), StoreError> {
        self.set(&params_key(), &encode(params)?)
    }

    /// Height of the last block whose tick completed.
    fn last_height(&self) -> Result<Option<u64>, StoreError> {
        match self.get(&height_key())? {
            Some(bytes) => {
                let arr: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    StoreError::Corruption("height has unexpected byte length".into())
                })?;
                Ok(Some(u64::from_be_bytes(arr)))
            }
            None => Ok(None),
        }
    }

    fn set_last_height(&self, height: u64) -> Result<(), StoreError> {
        self.set(&height_key(), &height.to_be_bytes())
    }
}

impl<S: KvStore + ?Sized> ParamsStore for S {}
