//! Curve parameters and the closed-form curve.
//!
//! The curve prices `already_sold` coins as if they were bought out of a
//! virtual pool of `max_virtual_coin_reserves` coins against
//! `virtual_sol_reserves` lamports, under a constant product:
//!
//! ```text
//!   f(s) = s * VIRTUAL_SOL_RESERVES / (MAX_VIRTUAL_COIN_RESERVES - s)
//!
//!   f⁻¹(y) = y * MAX_VIRTUAL_COIN_RESERVES / (VIRTUAL_SOL_RESERVES + y)
//! ```
//!
//! `f(s)` is the total SOL the curve should hold after `s` coins are sold.

use anchor_lang::prelude::*;

use super::math::{mul_div_ceil, mul_div_floor};
use crate::constants::{
    MAX_COIN_SUPPLY, MAX_VIRTUAL_COIN_RESERVES, SELLABLE_COINS, VIRTUAL_SOL_RESERVES,
};
use crate::errors::CurveError;

/// Immutable shape of a bonding curve.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct CurveParams {
    /// Coins minted for the market.
    pub max_coin_supply: u64,
    /// Migration threshold on `already_sold`.
    pub sellable_coins: u64,
    pub virtual_sol_reserves: u64,
    pub max_virtual_coin_reserves: u64,
}

impl CurveParams {
    pub const DEFAULT: CurveParams = CurveParams {
        max_coin_supply: MAX_COIN_SUPPLY,
        sellable_coins: SELLABLE_COINS,
        virtual_sol_reserves: VIRTUAL_SOL_RESERVES,
        max_virtual_coin_reserves: MAX_VIRTUAL_COIN_RESERVES,
    };

    /// Rejects parameter sets under which the curve denominator could reach
    /// zero before the migration threshold.
    pub fn validate(&self) -> Result<()> {
        require!(
            self.sellable_coins <= self.max_coin_supply,
            CurveError::ConfigInvalid
        );
        require!(
            self.sellable_coins < self.max_virtual_coin_reserves,
            CurveError::ConfigInvalid
        );
        require!(self.virtual_sol_reserves > 0, CurveError::ConfigInvalid);
        Ok(())
    }

    /// `floor(f(already_sold))`
    pub fn sol_at_floor(&self, already_sold: u64) -> Result<u128> {
        let denominator = self.curve_denominator(already_sold)?;
        mul_div_floor(
            already_sold as u128,
            self.virtual_sol_reserves as u128,
            denominator,
        )
    }

    /// `ceil(f(already_sold))`
    pub fn sol_at_ceil(&self, already_sold: u64) -> Result<u128> {
        let denominator = self.curve_denominator(already_sold)?;
        mul_div_ceil(
            already_sold as u128,
            self.virtual_sol_reserves as u128,
            denominator,
        )
    }

    /// `floor(f⁻¹(sol))`: the curve position at which the curve holds `sol`.
    pub fn coins_at(&self, sol: u128) -> Result<u128> {
        let denominator = (self.virtual_sol_reserves as u128)
            .checked_add(sol)
            .ok_or(CurveError::MathOverflow)?;
        mul_div_floor(sol, self.max_virtual_coin_reserves as u128, denominator)
    }

    fn curve_denominator(&self, already_sold: u64) -> Result<u128> {
        let denominator = self
            .max_virtual_coin_reserves
            .checked_sub(already_sold)
            .filter(|d| *d > 0)
            .ok_or(CurveError::MathOverflow)?;
        Ok(denominator as u128)
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}
