//! Coin → SOL quoting.
//!
//! Buy and sell round in opposite directions, so they are kept as two
//! separate functions:
//!
//! ```text
//! buy:  ceil(f(sold + amount)) - floor(f(sold))
//! sell: ceil(f(sold)) - floor(f(sold - amount)), clamped at 0
//! ```

use anchor_lang::prelude::*;

use super::math::to_u64;
use super::params::CurveParams;
use crate::errors::CurveError;

/// SOL a buyer must put into the curve to move it from `already_sold` to
/// `already_sold + amount`, fee excluded.
///
/// The caller guarantees `already_sold + amount <= curve.sellable_coins`.
pub fn quote_buy(curve: &CurveParams, already_sold: u64, amount: u64) -> Result<u64> {
    if amount == 0 {
        return Ok(0);
    }

    let sol_before = curve.sol_at_floor(already_sold)?;

    let already_sold_target = already_sold
        .checked_add(amount)
        .ok_or(CurveError::MathOverflow)?;
    let sol_after = curve.sol_at_ceil(already_sold_target)?;

    to_u64(sol_after - sol_before)
}

/// SOL the curve releases when it moves from `already_sold` down to
/// `already_sold - amount`, fee excluded.
pub fn quote_sell(curve: &CurveParams, already_sold: u64, amount: u64) -> Result<u64> {
    if amount == 0 {
        return Ok(0);
    }

    let sol_before = curve.sol_at_ceil(already_sold)?;

    let already_sold_target = already_sold
        .checked_sub(amount)
        .ok_or(CurveError::MathOverflow)?;
    let sol_after = curve.sol_at_floor(already_sold_target)?;

    if sol_before <= sol_after {
        Ok(0)
    } else {
        to_u64(sol_before - sol_after)
    }
}
