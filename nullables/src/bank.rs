//! Nullable account ledger: in-memory balances plus a record of every movement.

use stake_store::bank::{deposit, withdraw, Balance};
use stake_store::{AccountTransfer, TransferError};
use stake_types::{Address, Coins};
use std::collections::HashMap;

/// One recorded movement of coins. `from` is `None` for minted credits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: Option<Address>,
    pub to: Address,
    pub amount: Coins,
}

#[derive(Default)]
pub struct NullBank {
    balances: HashMap<Address, Balance>,
    transfers: Vec<Transfer>,
    /// Refuse every operation when set.
    reject_all: bool,
}

impl NullBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give an account an opening balance without recording a transfer.
    pub fn fund(&mut self, account: &Address, denom: &str, amount: u64) {
        *self
            .balances
            .entry(account.clone())
            .or_default()
            .entry(denom.to_string())
            .or_insert(0) += amount;
    }

    pub fn balance_of(&self, account: &Address, denom: &str) -> u64 {
        self.balances
            .get(account)
            .and_then(|b| b.get(denom))
            .copied()
            .unwrap_or(0)
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Total minted through `credit_account` in `denom`.
    pub fn minted(&self, denom: &str) -> u64 {
        self.transfers
            .iter()
            .filter(|t| t.from.is_none())
            .map(|t| t.amount.amount_of(denom))
            .sum()
    }

    pub fn set_reject_all(&mut self, reject: bool) {
        self.reject_all = reject;
    }

    fn check(&self, amount: &Coins) -> Result<(), TransferError> {
        if self.reject_all {
            return Err(TransferError::InvalidCoins("null bank configured to reject".into()));
        }
        if !amount.is_valid() {
            return Err(TransferError::InvalidCoins(amount.to_string()));
        }
        Ok(())
    }
}

impl AccountTransfer for NullBank {
    fn send_coins(&mut self, from: &Address, to: &Address, amount: &Coins) -> Result<(), TransferError> {
        self.check(amount)?;
        withdraw(from, self.balances.entry(from.clone()).or_default(), amount)?;
        deposit(to, self.balances.entry(to.clone()).or_default(), amount)?;
        self.transfers.push(Transfer {
            from: Some(from.clone()),
            to: to.clone(),
            amount: amount.clone(),
        });
        Ok(())
    }

    fn credit_account(&mut self, to: &Address, amount: &Coins) -> Result<(), TransferError> {
        self.check(amount)?;
        deposit(to, self.balances.entry(to.clone()).or_default(), amount)?;
        self.transfers.push(Transfer {
            from: None,
            to: to.clone(),
            amount: amount.clone(),
        });
        Ok(())
    }
}
