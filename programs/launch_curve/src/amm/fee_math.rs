//! Trading fees.
//!
//! Rates are numerators over [`FEE_RATE_BASIS_POINT`]. Fees always round
//! down and are charged on the curve-determined amount, never on a caller's
//! slippage bound.

use anchor_lang::prelude::*;

use super::math::{mul_div_floor, to_u64};
use crate::constants::FEE_RATE_BASIS_POINT;
use crate::errors::CurveError;

/// Fee paid on top of `pay_amount_without_fee` when buying coin.
pub fn buy_fee(pay_amount_without_fee: u64, maker_fee_rate: u32) -> Result<u64> {
    fee(pay_amount_without_fee, maker_fee_rate)
}

/// Fee withheld from `sol_amount` when selling coin.
pub fn sell_fee(sol_amount: u64, taker_fee_rate: u32) -> Result<u64> {
    fee(sol_amount, taker_fee_rate)
}

/// Grosses up an exact-out `receive` so that `receive` is what remains once
/// the taker fee is taken out:
///
/// ```text
/// total_receive = receive * FEE_RATE_BASIS_POINT / (FEE_RATE_BASIS_POINT - taker_fee_rate)
/// ```
///
/// The division truncates.
pub fn sell_exact_out_total(receive: u64, taker_fee_rate: u32) -> Result<u64> {
    let denominator = FEE_RATE_BASIS_POINT
        .checked_sub(taker_fee_rate)
        .filter(|d| *d > 0)
        .ok_or(CurveError::ConfigInvalid)?;
    let total = mul_div_floor(
        receive as u128,
        FEE_RATE_BASIS_POINT as u128,
        denominator as u128,
    )?;
    to_u64(total)
}

fn fee(amount: u64, rate: u32) -> Result<u64> {
    let fee = mul_div_floor(amount as u128, rate as u128, FEE_RATE_BASIS_POINT as u128)?;
    to_u64(fee)
}
