use anchor_lang::prelude::*;

#[error_code]
pub enum PayoutError {
    #[msg("Recipients and amounts must be the same length")]
    LengthMismatch,
    #[msg("Supplied funds must equal the batch total plus fee")]
    InsufficientOrExcessFunds,
    #[msg("Math overflow occurred during payout calculation")]
    ArithmeticOverflow,
    #[msg("Transfer cannot be delivered - batch rejected")]
    TransferFailed,
    #[msg("Only the administrator can change the fee rate")]
    Unauthorized,
    #[msg("Invalid fee rate - must be <= 10000 bps")]
    InvalidFeeRate,
}
