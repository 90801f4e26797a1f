//! Coin amounts in named denominations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single amount of one denomination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u64,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u64) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Denominations are 3 to 16 characters: a lowercase letter followed by
    /// lowercase letters or digits.
    pub fn is_valid_denom(denom: &str) -> bool {
        let bytes = denom.as_bytes();
        (3..=16).contains(&bytes.len())
            && bytes[0].is_ascii_lowercase()
            && bytes[1..]
                .iter()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A set of coins, one entry per denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins(pub Vec<Coin>);

impl Coins {
    pub fn single(denom: impl Into<String>, amount: u64) -> Self {
        Self(vec![Coin::new(denom, amount)])
    }

    /// Well-formed: every denomination valid and denominations strictly
    /// ascending (so no duplicates). Says nothing about the amounts.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|c| Coin::is_valid_denom(&c.denom))
            && self.0.windows(2).all(|w| w[0].denom < w[1].denom)
    }

    /// Non-empty with every amount strictly positive.
    pub fn is_positive(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|c| c.amount > 0)
    }

    /// Amount held in `denom`, zero if absent.
    pub fn amount_of(&self, denom: &str) -> u64 {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        Self(vec![coin])
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
