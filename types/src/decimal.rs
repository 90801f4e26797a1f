//! Exact decimal arithmetic for exchange rates, inflation and commission.
//!
//! All consensus-relevant fractional math goes through [`rust_decimal::Decimal`]:
//! 96-bit mantissa, scale up to 28, identical results on every platform.
//! The operator impls on `Decimal` panic on overflow, so code paths that
//! handle untrusted magnitudes use the checked helpers below instead.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("division by zero in {0}")]
    DivisionByZero(&'static str),

    #[error("negative value in {0}")]
    Negative(&'static str),
}

/// `num / den` as an exact decimal. Panics only if `den` is zero, so it is
/// meant for constants such as genesis parameters.
pub fn fraction(num: i64, den: i64) -> Decimal {
    Decimal::from(num) / Decimal::from(den)
}

pub fn checked_add(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, ArithmeticError> {
    a.checked_add(b).ok_or(ArithmeticError::Overflow(what))
}

pub fn checked_sub(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, ArithmeticError> {
    a.checked_sub(b).ok_or(ArithmeticError::Overflow(what))
}

pub fn checked_mul(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, ArithmeticError> {
    a.checked_mul(b).ok_or(ArithmeticError::Overflow(what))
}

pub fn checked_div(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero(what));
    }
    a.checked_div(b).ok_or(ArithmeticError::Overflow(what))
}

/// Truncate a decimal coin value toward zero into an integer coin amount.
///
/// The fractional remainder is dropped, not carried forward.
pub fn to_coin_amount(value: Decimal, what: &'static str) -> Result<u64, ArithmeticError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ArithmeticError::Negative(what));
    }
    value.trunc().to_u64().ok_or(ArithmeticError::Overflow(what))
}
