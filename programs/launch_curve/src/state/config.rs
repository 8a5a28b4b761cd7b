//! Global Protocol Configuration
//!
//! Fee settings and the identities the outer program checks accounts
//! against. One `Config` is shared by every coin launched under it.

use anchor_lang::prelude::*;

use crate::constants::FEE_RATE_BASIS_POINT;
use crate::errors::CurveError;

/// Event emitted when the authority changes the fee schedule
#[event]
pub struct FeeUpdated {
    pub authority: Pubkey,
    pub create_coin_fee: u64,
    pub taker_fee_rate: u32,
    pub maker_fee_rate: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Config {
    /// Only key allowed to change the fee schedule
    pub authority: Pubkey,

    /// Receives trading fees and create-coin fees
    pub fee_recipient: Pubkey,

    /// Key allowed to migrate a coin once its curve is complete
    pub migration_authority: Pubkey,

    /// Flat fee (lamports) charged when a coin is created
    pub create_coin_fee: u64,

    /// Fee rate on sells, over `FEE_RATE_BASIS_POINT`
    pub taker_fee_rate: u32,

    /// Fee rate on buys, over `FEE_RATE_BASIS_POINT`
    pub maker_fee_rate: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeConfigArgs {
    /// The authority to set on the config.
    pub authority: Pubkey,
    /// The recipient of fees, include trading fees and create coin fees.
    pub fee_recipient: Pubkey,
    /// The authority to migrate the coin once the curve completes.
    pub migration_authority: Pubkey,
    pub create_coin_fee: u64,
    pub taker_fee_rate: u32,
    pub maker_fee_rate: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct UpdateFeeArgs {
    pub create_coin_fee: u64,
    pub taker_fee_rate: u32,
    pub maker_fee_rate: u32,
}

impl Config {
    pub fn initialize(args: InitializeConfigArgs) -> Result<Self> {
        Self::check_fee_rates(args.taker_fee_rate, args.maker_fee_rate)?;

        msg!("Config initialized!");
        msg!("Authority: {}", args.authority);
        msg!("Fee recipient: {}", args.fee_recipient);
        msg!(
            "Fees: create={} taker={} maker={}",
            args.create_coin_fee,
            args.taker_fee_rate,
            args.maker_fee_rate
        );

        Ok(Self {
            authority: args.authority,
            fee_recipient: args.fee_recipient,
            migration_authority: args.migration_authority,
            create_coin_fee: args.create_coin_fee,
            taker_fee_rate: args.taker_fee_rate,
            maker_fee_rate: args.maker_fee_rate,
        })
    }

    /// Replaces the fee schedule. Nothing is written unless `signer` is the
    /// authority and both rates are valid.
    pub fn update_fee(&mut self, signer: &Pubkey, args: UpdateFeeArgs) -> Result<()> {
        require_keys_eq!(*signer, self.authority, CurveError::Unauthorized);
        Self::check_fee_rates(args.taker_fee_rate, args.maker_fee_rate)?;

        self.create_coin_fee = args.create_coin_fee;
        self.taker_fee_rate = args.taker_fee_rate;
        self.maker_fee_rate = args.maker_fee_rate;

        emit!(FeeUpdated {
            authority: *signer,
            create_coin_fee: args.create_coin_fee,
            taker_fee_rate: args.taker_fee_rate,
            maker_fee_rate: args.maker_fee_rate,
        });
        Ok(())
    }

    pub fn is_fee_recipient(&self, key: &Pubkey) -> bool {
        self.fee_recipient == *key
    }

    pub fn is_migration_authority(&self, key: &Pubkey) -> bool {
        self.migration_authority == *key
    }

    fn check_fee_rates(taker_fee_rate: u32, maker_fee_rate: u32) -> Result<()> {
        if taker_fee_rate >= FEE_RATE_BASIS_POINT {
            msg!("Invalid taker fee rate: {}", taker_fee_rate);
            return err!(CurveError::ConfigInvalid);
        }
        if maker_fee_rate >= FEE_RATE_BASIS_POINT {
            msg!("Invalid maker fee rate: {}", maker_fee_rate);
            return err!(CurveError::ConfigInvalid);
        }
        Ok(())
    }
}
