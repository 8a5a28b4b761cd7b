//! # Launch Curve
//!
//! Bonding-curve pricing and trade accounting for coin launches on Solana.
//!
//! ## Overview
//!
//! Every coin starts on a virtual-reserve curve. Buyers push it up, sellers
//! push it back down, and once the sellable supply is gone the curve is
//! marked migrated and stops taking buys.
//!
//! ## How it works
//! - [`amm`] prices trades in integer lamports and coin base units.
//! - [`state::Coin`] runs buys and sells against one curve and returns a
//!   receipt for each trade.
//! - [`state::Config`] holds the fee schedule shared by every coin.
//!
//! Accounts, token transfers and instruction dispatch belong to the program
//! that embeds this crate.

pub mod amm;
pub mod constants;
pub mod errors;
pub mod state;

pub use amm::*;
pub use errors::CurveError;
pub use state::*;
