//! Per-block inflation adjustment.
//!
//! Inflation moves toward `inflation_max` while less than `goal_bonded` of
//! the supply is bonded and toward `inflation_min` once more is bonded. The
//! annual change is at most `inflation_rate_change`, spread over
//! `blocks_per_year` blocks.

use stake_types::decimal::{checked_add, checked_div, checked_mul, checked_sub};
use stake_types::{ArithmeticError, Decimal, Params};

/// Fraction of the total supply held in the bonded pool.
pub fn bonded_ratio(params: &Params) -> Result<Decimal, ArithmeticError> {
    if params.total_supply == 0 {
        return Ok(Decimal::ZERO);
    }
    checked_div(
        Decimal::from(params.bonded_pool),
        Decimal::from(params.total_supply),
        "bonded ratio",
    )
}

/// The inflation rate for the next block.
pub fn next_inflation(params: &Params) -> Result<Decimal, ArithmeticError> {
    if params.blocks_per_year == 0 {
        return Ok(params.inflation);
    }
    let ratio = checked_div(bonded_ratio(params)?, params.goal_bonded, "goal bonded")?;
    let per_year = checked_mul(
        checked_sub(Decimal::ONE, ratio, "inflation change")?,
        params.inflation_rate_change,
        "inflation change",
    )?;
    let per_block = checked_div(per_year, Decimal::from(params.blocks_per_year), "inflation change")?;
    let next = checked_add(params.inflation, per_block, "inflation")?;
    Ok(next.clamp(params.inflation_min, params.inflation_max))
}
