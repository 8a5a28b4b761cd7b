//! Curve and Fee Constants
//!
//! All coin amounts are in base units (`DECIMALS` = 6), all base-asset
//! amounts are in lamports.

/// Denominator for fee rates.
/// Fee amount = amount * fee_rate / FEE_RATE_BASIS_POINT.
pub const FEE_RATE_BASIS_POINT: u32 = 100_000_000;

pub const DECIMALS: u8 = 6;

const ONE_COIN: u64 = 1_000_000;

/// Total coin units ever minted for a market.
pub const MAX_COIN_SUPPLY: u64 = 1_000_000_000 * ONE_COIN;

/// Coins held back from the curve and paired with the raised SOL on migration.
pub const RESERVED_COINS: u64 = 206_900_000 * ONE_COIN;

/// Migration threshold: once this many coins are sold, buys stop.
pub const SELLABLE_COINS: u64 = MAX_COIN_SUPPLY - RESERVED_COINS;

pub const VIRTUAL_COIN_RESERVES: u64 = 73_000_000 * ONE_COIN;
pub const MAX_VIRTUAL_COIN_RESERVES: u64 = MAX_COIN_SUPPLY + VIRTUAL_COIN_RESERVES;

/// 30 SOL of virtual liquidity.
pub const VIRTUAL_SOL_RESERVES: u64 = 30_000_000_000;
