//! SOL → coin quoting (exact-in buys, exact-out sells).
//!
//! Both directions start from `floor(f(already_sold))`. Rounding the starting
//! point down means a buyer's SOL is credited from slightly lower on the curve
//! (fewer coins) and a seller's requested SOL is measured against slightly
//! less balance (more coins). Either way the residue stays with the curve.

use anchor_lang::prelude::*;

use super::math::to_u64;
use super::params::CurveParams;
use crate::errors::CurveError;

/// Coins bought by putting `sol_in` (fee excluded) into the curve.
///
/// Returns 0 when `sol_in` is too small to move the curve by a whole unit,
/// and clamps to the remaining sellable supply when it overshoots.
pub fn buy_for_exact_base_in(curve: &CurveParams, already_sold: u64, sol_in: u64) -> Result<u64> {
    let sol_before = curve.sol_at_floor(already_sold)?;

    let sol_after = sol_before
        .checked_add(sol_in as u128)
        .ok_or(CurveError::MathOverflow)?;
    let coin_after = curve.coins_at(sol_after)?;

    if coin_after <= already_sold as u128 {
        Ok(0)
    } else if coin_after >= curve.sellable_coins as u128 {
        curve
            .sellable_coins
            .checked_sub(already_sold)
            .ok_or_else(|| CurveError::MathOverflow.into())
    } else {
        to_u64(coin_after - already_sold as u128)
    }
}

/// Coins that must be sold for the curve to release exactly `sol_out`
/// (fee included).
pub fn sell_for_exact_base_out(
    curve: &CurveParams,
    already_sold: u64,
    sol_out: u64,
) -> Result<u64> {
    let sol_before = curve.sol_at_floor(already_sold)?;

    require!(sol_out as u128 <= sol_before, CurveError::AmountTooLarge);
    if sol_out as u128 == sol_before {
        // Draining the curve: the inversion is degenerate here, every sold
        // coin comes back.
        return Ok(already_sold);
    }

    let sol_after = sol_before - sol_out as u128;
    let coin_after = curve.coins_at(sol_after)?;
    if coin_after >= already_sold as u128 {
        msg!(
            "Invariant violation: inversion at sold={} out={} gave coin_after={}",
            already_sold,
            sol_out,
            coin_after
        );
        return err!(CurveError::InvariantViolation);
    }

    to_u64(already_sold as u128 - coin_after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amm::coin_math;
    use crate::constants::{MAX_COIN_SUPPLY, RESERVED_COINS, SELLABLE_COINS};

    const CURVE: CurveParams = CurveParams::DEFAULT;
    const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    fn curve_err(e: CurveError) -> anchor_lang::error::Error {
        e.into()
    }

    #[test]
    fn test_buy_already_sold_is_0_and_buy_all() {
        let coin = buy_for_exact_base_in(&CURVE, 0, 85_005_359_057).unwrap();
        assert_eq!(coin, SELLABLE_COINS);
    }

    #[test]
    fn test_buy_already_sold_is_0_and_pay_amount_is_too_high() {
        let coin = buy_for_exact_base_in(&CURVE, 0, 85_005_359_057 + LAMPORTS_PER_SOL).unwrap();
        assert_eq!(coin, SELLABLE_COINS);
    }

    #[test]
    fn test_buy_already_sold_is_0_and_pay_small_amounts() {
        assert_eq!(buy_for_exact_base_in(&CURVE, 0, 1).unwrap(), 35_766);
        assert_eq!(
            buy_for_exact_base_in(&CURVE, 0, 100_000_000).unwrap(),
            3_564_784_053_156
        );
        assert_eq!(
            buy_for_exact_base_in(&CURVE, 0, LAMPORTS_PER_SOL).unwrap(),
            34_612_903_225_806
        );
        assert_eq!(
            buy_for_exact_base_in(&CURVE, 0, 3_333_333_333).unwrap(),
            107_299_999_990_342
        );
    }

    #[test]
    fn test_buy_zero_sol_buys_nothing() {
        assert_eq!(buy_for_exact_base_in(&CURVE, 0, 0).unwrap(), 0);
        assert_eq!(
            buy_for_exact_base_in(&CURVE, 300_000_000_000_000, 0).unwrap(),
            0
        );
    }

    #[test]
    fn test_buy_at_cap_buys_nothing() {
        assert_eq!(
            buy_for_exact_base_in(&CURVE, SELLABLE_COINS, LAMPORTS_PER_SOL).unwrap(),
            0
        );
    }

    #[test]
    fn test_buy_mid_curve_never_beats_the_buy_quote() {
        let already_sold = 2_692_001_940_000;
        let sol_in = 10 * LAMPORTS_PER_SOL;
        let coin = buy_for_exact_base_in(&CURVE, already_sold, sol_in).unwrap();
        assert_eq!(coin, 267_073_199_500_706);

        let quoted = coin_math::quote_buy(&CURVE, already_sold, coin).unwrap();
        assert!(quoted <= sol_in);
        let one_more = coin_math::quote_buy(&CURVE, already_sold, coin + 1).unwrap();
        assert!(one_more > sol_in);
    }

    #[test]
    fn test_sell_everything_back() {
        let sol = coin_math::quote_buy(&CURVE, 0, SELLABLE_COINS).unwrap();
        let coin = buy_for_exact_base_in(&CURVE, 0, sol).unwrap();
        assert_eq!(coin, SELLABLE_COINS);

        let coin_back = sell_for_exact_base_out(&CURVE, SELLABLE_COINS, sol - 1).unwrap();
        assert_eq!(coin_back, SELLABLE_COINS);
    }

    #[test]
    fn test_sell_exactly_the_floor_drains_position() {
        let already_sold = 123_456_789_000_000;
        let floor = CURVE.sol_at_floor(already_sold).unwrap() as u64;
        assert_eq!(
            sell_for_exact_base_out(&CURVE, already_sold, floor).unwrap(),
            already_sold
        );
    }

    #[test]
    fn test_sell_more_than_curve_holds_fails() {
        let already_sold = 123_456_789_000_000;
        let floor = CURVE.sol_at_floor(already_sold).unwrap() as u64;
        assert_eq!(
            sell_for_exact_base_out(&CURVE, already_sold, floor + 1).unwrap_err(),
            curve_err(CurveError::AmountTooLarge)
        );
        assert_eq!(
            sell_for_exact_base_out(&CURVE, 0, 1).unwrap_err(),
            curve_err(CurveError::AmountTooLarge)
        );
    }

    #[test]
    fn test_sell_zero_out_on_fresh_curve() {
        // floor(f(0)) = 0, so asking for 0 hits the drain branch.
        assert_eq!(sell_for_exact_base_out(&CURVE, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_sell_recovers_at_least_the_bought_coins() {
        let real_token_reserves: u64 = 589_359_216_751_050;
        let already_sold = MAX_COIN_SUPPLY - (real_token_reserves + RESERVED_COINS);

        for (sol, expected_coin) in [
            (LAMPORTS_PER_SOL / 2, 11_580_385_658_285),
            (LAMPORTS_PER_SOL, 22_856_276_991_103),
            (23_333_330_000, 336_001_966_735_479),
        ] {
            let coin = buy_for_exact_base_in(&CURVE, already_sold, sol).unwrap();
            assert_eq!(coin, expected_coin);
            let coin_recover = sell_for_exact_base_out(&CURVE, already_sold + coin, sol).unwrap();
            assert!(coin_recover >= coin);
        }
    }

    #[test]
    fn test_sell_exact_out_inverts_quote_sell() {
        let already_sold = 400_000_000_000_000;
        for amount in [1_000_000_000, 55_555_555_555, 100_000_000_000_000] {
            let sol = coin_math::quote_sell(&CURVE, already_sold, amount).unwrap();
            let coin = sell_for_exact_base_out(&CURVE, already_sold, sol).unwrap();
            assert!(coin >= amount);
            assert!(coin_math::quote_sell(&CURVE, already_sold, coin).unwrap() >= sol);
        }
    }
}
