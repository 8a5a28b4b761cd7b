//! Coin Market State
//!
//! Each launched coin has one bonding curve. `Coin` tracks where that curve
//! sits and runs the four trading operations against it:
//!
//! | operation        | caller fixes         | limit checked        |
//! |------------------|----------------------|----------------------|
//! | `buy`            | coins to buy         | max SOL to pay       |
//! | `buy_exact_in`   | SOL to pay (net fee) | min coins to receive |
//! | `sell`           | coins to sell        | min SOL to receive   |
//! | `sell_exact_out` | SOL to receive       | max coins to pay     |
//!
//! Every operation is computed in full by its `preview_*` counterpart before
//! any field is written, so a failed call leaves the coin untouched. The
//! returned receipt is what the caller settles against external balances.

use anchor_lang::prelude::*;

use crate::amm::{
    buy_fee, buy_for_exact_base_in, quote_buy, quote_sell, sell_exact_out_total, sell_fee,
    sell_for_exact_base_out, CurveParams,
};
use crate::errors::CurveError;
use crate::state::Config;

/// Event emitted when coins are bought
#[event]
pub struct CoinBought {
    pub coin_amount: u64,
    pub pay_amount: u64,
    pub fee: u64,
    pub remaining_coin_supply: u64,
    pub accumulated_base_asset: u64,
}

/// Event emitted when coins are sold
#[event]
pub struct CoinSold {
    pub coin_amount: u64,
    pub receive_amount: u64,
    pub fee: u64,
    pub remaining_coin_supply: u64,
    pub accumulated_base_asset: u64,
}

/// Event emitted when a buy fills the curve up to the migration threshold
#[event]
pub struct CurveMigrated {
    pub already_sold: u64,
    pub accumulated_base_asset: u64,
}

/// Curve lifecycle status
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum CurveStatus {
    /// Buys and sells are open
    #[default]
    Active,
    /// The migration threshold was reached; no further buys
    Migrated,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct Coin {
    /// Shape of this coin's curve
    pub curve: CurveParams,

    /// Coins not yet sold, including the coins reserved for migration
    pub remaining_coin_supply: u64,

    /// Net SOL held by the curve (fees excluded)
    pub accumulated_base_asset: u64,

    pub status: CurveStatus,
}

/// Settlement of a buy: the buyer pays `pay_amount` into the curve and `fee`
/// to the fee recipient, and receives `coin_amount`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuyReceipt {
    pub coin_amount: u64,
    pub pay_amount: u64,
    pub fee: u64,
}

impl BuyReceipt {
    pub fn total_pay(&self) -> u64 {
        self.pay_amount + self.fee
    }
}

/// Settlement of a sell: the seller hands over `coin_amount` and receives
/// `receive_amount`; `fee` goes to the fee recipient. Both come out of the
/// curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellReceipt {
    pub coin_amount: u64,
    pub receive_amount: u64,
    pub fee: u64,
}

impl SellReceipt {
    pub fn curve_payout(&self) -> u64 {
        self.receive_amount + self.fee
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self {
            curve: CurveParams::DEFAULT,
            remaining_coin_supply: CurveParams::DEFAULT.max_coin_supply,
            accumulated_base_asset: 0,
            status: CurveStatus::Active,
        }
    }
}

impl Coin {
    /// A fresh curve: nothing sold, no SOL held.
    pub fn launch(curve: CurveParams) -> Result<Self> {
        curve.validate()?;
        Ok(Self {
            curve,
            remaining_coin_supply: curve.max_coin_supply,
            accumulated_base_asset: 0,
            status: CurveStatus::Active,
        })
    }

    /// Current curve position.
    pub fn already_sold(&self) -> Result<u64> {
        self.curve
            .max_coin_supply
            .checked_sub(self.remaining_coin_supply)
            .ok_or_else(|| CurveError::MathOverflow.into())
    }

    /// Coins that can still be bought before migration.
    pub fn available_supply(&self) -> Result<u64> {
        if self.status == CurveStatus::Migrated {
            return Ok(0);
        }
        Ok(self
            .curve
            .sellable_coins
            .saturating_sub(self.already_sold()?))
    }

    // -------------------------------------------------------------------------
    // buy
    // -------------------------------------------------------------------------

    pub fn preview_buy(&self, config: &Config, amount: u64, max_pay: u64) -> Result<BuyReceipt> {
        let already_sold = self.already_sold()?;
        self.require_buyable(already_sold)?;
        require!(
            amount <= self.curve.sellable_coins - already_sold,
            CurveError::AmountExceedsSellable
        );

        let pay_amount = quote_buy(&self.curve, already_sold, amount)?;
        let fee = buy_fee(pay_amount, config.maker_fee_rate)?;
        let total_pay = pay_amount
            .checked_add(fee)
            .ok_or(CurveError::MathOverflow)?;
        require!(total_pay <= max_pay, CurveError::SlippageExceeded);

        Ok(BuyReceipt {
            coin_amount: amount,
            pay_amount,
            fee,
        })
    }

    /// Buys exactly `amount` coins, paying at most `max_pay` SOL fee included.
    pub fn buy(&mut self, config: &Config, amount: u64, max_pay: u64) -> Result<BuyReceipt> {
        let receipt = self.preview_buy(config, amount, max_pay)?;
        self.commit_buy(&receipt)?;
        Ok(receipt)
    }

    // -------------------------------------------------------------------------
    // buy_exact_in
    // -------------------------------------------------------------------------

    pub fn preview_buy_exact_in(
        &self,
        config: &Config,
        pay_amount: u64,
        min_receive: u64,
    ) -> Result<BuyReceipt> {
        let already_sold = self.already_sold()?;
        self.require_buyable(already_sold)?;

        let fee = buy_fee(pay_amount, config.maker_fee_rate)?;
        pay_amount
            .checked_add(fee)
            .ok_or(CurveError::MathOverflow)?;

        // Overshooting the threshold is not an error here: the buyer gets the
        // rest of the sellable supply and the whole payment enters the curve.
        let coin_amount = buy_for_exact_base_in(&self.curve, already_sold, pay_amount)?;
        require!(coin_amount >= min_receive, CurveError::SlippageExceeded);

        Ok(BuyReceipt {
            coin_amount,
            pay_amount,
            fee,
        })
    }

    /// Spends `pay_amount` SOL (fee charged on top) on as many coins as it
    /// buys, requiring at least `min_receive`.
    pub fn buy_exact_in(
        &mut self,
        config: &Config,
        pay_amount: u64,
        min_receive: u64,
    ) -> Result<BuyReceipt> {
        let receipt = self.preview_buy_exact_in(config, pay_amount, min_receive)?;
        self.commit_buy(&receipt)?;
        Ok(receipt)
    }

    // -------------------------------------------------------------------------
    // sell
    // -------------------------------------------------------------------------

    pub fn preview_sell(&self, config: &Config, amount: u64, min_receive: u64) -> Result<SellReceipt> {
        let already_sold = self.already_sold()?;
        require!(amount <= already_sold, CurveError::AmountExceedsSold);

        let quote = quote_sell(&self.curve, already_sold, amount)?;
        // The sell quote rounds its starting point up, so the last sells off
        // a curve can ask for a lamport more than it holds.
        let payout = quote.min(self.accumulated_base_asset);
        let fee = sell_fee(payout, config.taker_fee_rate)?;
        let receive_amount = payout
            .checked_sub(fee)
            .ok_or(CurveError::MathOverflow)?;
        require!(receive_amount >= min_receive, CurveError::SlippageExceeded);

        Ok(SellReceipt {
            coin_amount: amount,
            receive_amount,
            fee,
        })
    }

    /// Sells exactly `amount` coins, receiving at least `min_receive` SOL
    /// after fee.
    pub fn sell(&mut self, config: &Config, amount: u64, min_receive: u64) -> Result<SellReceipt> {
        let receipt = self.preview_sell(config, amount, min_receive)?;
        self.commit_sell(&receipt)?;
        Ok(receipt)
    }

    // -------------------------------------------------------------------------
    // sell_exact_out
    // -------------------------------------------------------------------------

    pub fn preview_sell_exact_out(
        &self,
        config: &Config,
        receive: u64,
        max_pay: u64,
    ) -> Result<SellReceipt> {
        require!(receive > 0, CurveError::InvalidReceive);
        let already_sold = self.already_sold()?;

        // total_receive = receive / (1 - taker_fee_rate)
        let total_receive = sell_exact_out_total(receive, config.taker_fee_rate)?;
        require!(
            total_receive <= self.accumulated_base_asset,
            CurveError::AmountTooLarge
        );

        let coin_amount = sell_for_exact_base_out(&self.curve, already_sold, total_receive)?;
        require!(coin_amount <= max_pay, CurveError::SlippageExceeded);

        Ok(SellReceipt {
            coin_amount,
            receive_amount: receive,
            fee: total_receive - receive,
        })
    }

    /// Receives exactly `receive` SOL after fee, selling at most `max_pay`
    /// coins.
    pub fn sell_exact_out(
        &mut self,
        config: &Config,
        receive: u64,
        max_pay: u64,
    ) -> Result<SellReceipt> {
        let receipt = self.preview_sell_exact_out(config, receive, max_pay)?;
        self.commit_sell(&receipt)?;
        Ok(receipt)
    }

    // -------------------------------------------------------------------------
    // helpers
    // -------------------------------------------------------------------------

    fn require_buyable(&self, already_sold: u64) -> Result<()> {
        require!(
            self.status == CurveStatus::Active && already_sold < self.curve.sellable_coins,
            CurveError::MigrationLimitExceeded
        );
        Ok(())
    }

    fn commit_buy(&mut self, receipt: &BuyReceipt) -> Result<()> {
        let remaining_coin_supply = self
            .remaining_coin_supply
            .checked_sub(receipt.coin_amount)
            .ok_or(CurveError::MathOverflow)?;
        let accumulated_base_asset = self
            .accumulated_base_asset
            .checked_add(receipt.pay_amount)
            .ok_or(CurveError::MathOverflow)?;

        self.remaining_coin_supply = remaining_coin_supply;
        self.accumulated_base_asset = accumulated_base_asset;

        emit!(CoinBought {
            coin_amount: receipt.coin_amount,
            pay_amount: receipt.pay_amount,
            fee: receipt.fee,
            remaining_coin_supply,
            accumulated_base_asset,
        });

        let already_sold = self.already_sold()?;
        if already_sold >= self.curve.sellable_coins {
            self.status = CurveStatus::Migrated;
            msg!(
                "Curve complete: {} coins sold, {} lamports raised",
                already_sold,
                accumulated_base_asset
            );
            emit!(CurveMigrated {
                already_sold,
                accumulated_base_asset,
            });
        }
        Ok(())
    }

    fn commit_sell(&mut self, receipt: &SellReceipt) -> Result<()> {
        let remaining_coin_supply = self
            .remaining_coin_supply
            .checked_add(receipt.coin_amount)
            .filter(|remaining| *remaining <= self.curve.max_coin_supply)
            .ok_or(CurveError::MathOverflow)?;
        let accumulated_base_asset = self
            .accumulated_base_asset
            .checked_sub(receipt.curve_payout())
            .ok_or(CurveError::MathOverflow)?;

        self.remaining_coin_supply = remaining_coin_supply;
        self.accumulated_base_asset = accumulated_base_asset;

        emit!(CoinSold {
            coin_amount: receipt.coin_amount,
            receive_amount: receipt.receive_amount,
            fee: receipt.fee,
            remaining_coin_supply,
            accumulated_base_asset,
        });
        Ok(())
    }
}
