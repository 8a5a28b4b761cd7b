//! Checked integer helpers shared by the quoting modules.
//!
//! Every product of two `u64` values is taken in `u128`. Anything that can
//! still overflow, underflow or divide by zero surfaces as
//! [`CurveError::MathOverflow`] instead of wrapping or panicking.

use anchor_lang::prelude::*;

use crate::errors::CurveError;

/// `floor(a * b / d)`
#[inline]
pub fn mul_div_floor(a: u128, b: u128, d: u128) -> Result<u128> {
    a.checked_mul(b)
        .and_then(|p| p.checked_div(d))
        .ok_or_else(|| CurveError::MathOverflow.into())
}

/// `ceil(a * b / d)`
#[inline]
pub fn mul_div_ceil(a: u128, b: u128, d: u128) -> Result<u128> {
    let p = a.checked_mul(b).ok_or(CurveError::MathOverflow)?;
    ceil_div(p, d)
}

pub fn ceil_div(a: u128, b: u128) -> Result<u128> {
    let c = a.checked_div(b).ok_or(CurveError::MathOverflow)?;
    if c * b == a {
        Ok(c)
    } else {
        Ok(c + 1)
    }
}

#[inline]
pub fn to_u64(v: u128) -> Result<u64> {
    u64::try_from(v).map_err(|_| CurveError::MathOverflow.into())
}
