//! Account-transfer capability.
//!
//! Balances belong to an external ledger module; the staking core only moves
//! coins through [`AccountTransfer`]. [`KvBank`] is a minimal ledger kept in
//! the same key-value store under its own `bank/` prefix, used by the daemon.

use crate::codec::{decode, encode};
use crate::{KvStore, StoreError};
use stake_types::{Address, Coins};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("insufficient funds in {account}: need {needed}{denom}, have {available}{denom}")]
    InsufficientFunds {
        account: String,
        denom: String,
        needed: u64,
        available: u64,
    },

    #[error("invalid coins: {0}")]
    InvalidCoins(String),

    #[error("balance overflow for {0}")]
    Overflow(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub trait AccountTransfer {
    /// Move coins between two accounts.
    fn send_coins(&mut self, from: &Address, to: &Address, amount: &Coins) -> Result<(), TransferError>;

    /// Mint coins into an account.
    fn credit_account(&mut self, to: &Address, amount: &Coins) -> Result<(), TransferError>;
}

/// Per-denomination balance of one account.
pub type Balance = BTreeMap<String, u64>;

/// Add `amount` into `balance`.
pub fn deposit(account: &Address, balance: &mut Balance, amount: &Coins) -> Result<(), TransferError> {
    for coin in amount.iter() {
        let entry = balance.entry(coin.denom.clone()).or_insert(0);
        *entry = entry
            .checked_add(coin.amount)
            .ok_or_else(|| TransferError::Overflow(account.to_string()))?;
    }
    Ok(())
}

/// Take `amount` out of `balance`, failing without partial effect on overdraft.
pub fn withdraw(account: &Address, balance: &mut Balance, amount: &Coins) -> Result<(), TransferError> {
    for coin in amount.iter() {
        let available = balance.get(&coin.denom).copied().unwrap_or(0);
        if available < coin.amount {
            return Err(TransferError::InsufficientFunds {
                account: account.to_string(),
                denom: coin.denom.clone(),
                needed: coin.amount,
                available,
            });
        }
    }
    for coin in amount.iter() {
        if let Some(entry) = balance.get_mut(&coin.denom) {
            *entry -= coin.amount;
        }
    }
    balance.retain(|_, v| *v > 0);
    Ok(())
}

fn balance_key(account: &Address) -> Vec<u8> {
    let mut key = b"bank/".to_vec();
    key.extend_from_slice(account.as_str().as_bytes());
    key
}

/// Account ledger persisted in a [`KvStore`].
pub struct KvBank<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: KvStore + ?Sized> KvBank<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn balance(&self, account: &Address) -> Result<Balance, StoreError> {
        match self.store.get(&balance_key(account))? {
            Some(bytes) => decode(&bytes),
            None => Ok(Balance::new()),
        }
    }

    fn save_balance(&self, account: &Address, balance: &Balance) -> Result<(), StoreError> {
        if balance.is_empty() {
            self.store.delete(&balance_key(account))
        } else {
            self.store.set(&balance_key(account), &encode(balance)?)
        }
    }
}

impl<S: KvStore + ?Sized> AccountTransfer for KvBank<'_, S> {
    fn send_coins(&mut self, from: &Address, to: &Address, amount: &Coins) -> Result<(), TransferError> {
        if !amount.is_valid() {
            return Err(TransferError::InvalidCoins(amount.to_string()));
        }
        let mut source = self.balance(from)?;
        withdraw(from, &mut source, amount)?;
        self.save_balance(from, &source)?;
        let mut dest = self.balance(to)?;
        deposit(to, &mut dest, amount)?;
        self.save_balance(to, &dest)?;
        Ok(())
    }

    fn credit_account(&mut self, to: &Address, amount: &Coins) -> Result<(), TransferError> {
        if !amount.is_valid() {
            return Err(TransferError::InvalidCoins(amount.to_string()));
        }
        let mut dest = self.balance(to)?;
        deposit(to, &mut dest, amount)?;
        self.save_balance(to, &dest)?;
        Ok(())
    }
}
