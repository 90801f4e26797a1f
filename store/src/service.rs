//! Service definitions, keyed by name.

use crate::codec::{decode, encode};
use crate::keys::service_key;
use crate::{KvStore, StoreError};
use stake_types::ServiceDefinition;

pub trait ServiceStore: KvStore {
    fn get_service_definition(&self, name: &str) -> Result<Option<ServiceDefinition>, StoreError> {
        match self.get(&service_key(name))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save_service_definition(&self, service: &ServiceDefinition) -> Result<(), StoreError> {
        self.set(&service_key(&service.name), &encode(service)?)
    }
}

impl<S: KvStore + ?Sized> ServiceStore for S {}
