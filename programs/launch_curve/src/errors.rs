use anchor_lang::prelude::*;

/// Errors raised by the curve engine.
///
/// Everything except `InvariantViolation` and `MathOverflow` is a normal
/// rejection: the caller can retry with different inputs and no state was
/// touched.
#[error_code]
pub enum CurveError {
    /// code = 6000
    #[msg("Invalid configuration")]
    ConfigInvalid,
    /// code = 6001
    #[msg("Signer is not the config authority")]
    Unauthorized,
    /// code = 6002
    #[msg("Amount exceeds the remaining sellable supply")]
    AmountExceedsSellable,
    /// code = 6003
    #[msg("Migration limit exceeded")]
    MigrationLimitExceeded,
    /// code = 6004
    #[msg("Slippage tolerance exceeded")]
    SlippageExceeded,
    /// code = 6005
    #[msg("Requested output exceeds the curve balance")]
    AmountTooLarge,
    /// code = 6006
    #[msg("Curve inversion did not make progress")]
    InvariantViolation,
    /// code = 6007
    #[msg("Arithmetic overflow")]
    MathOverflow,
    /// code = 6008
    #[msg("Amount exceeds the coins sold on the curve")]
    AmountExceedsSold,
    /// code = 6009
    #[msg("Receive amount must be positive")]
    InvalidReceive,
}
