//! # Bonding Curve Math
//!
//! Pure, stateless pricing for the launch curve. Nothing in here reads or
//! writes market state; the [`crate::state::Coin`] state machine sequences
//! these calls and owns the checks that keep their inputs in range.
//!
//! ```text
//!   SOL ▲
//!       │                               ╱
//!       │                             ╱
//!       │                          ╱
//!       │                     _ ╱
//!       │              _ _ ‾‾
//!       │    _ _ _ ‾‾‾
//!       └──────────────────────────┬────▶ coins sold
//!                                  SELLABLE_COINS (migration)
//! ```
//!
//! - [`coin_math`]: coin amount in, SOL out (fixed-amount buy and sell)
//! - [`sol_math`]: SOL amount in, coin amount out (exact-in buy, exact-out sell)
//! - [`fee_math`]: maker/taker fees

pub mod coin_math;
pub mod fee_math;
pub mod math;
pub mod params;
pub mod sol_math;

pub use coin_math::{quote_buy, quote_sell};
pub use fee_math::{buy_fee, sell_exact_out_total, sell_fee};
pub use params::CurveParams;
pub use sol_math::{buy_for_exact_base_in, sell_for_exact_base_out};
