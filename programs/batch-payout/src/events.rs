use anchor_lang::prelude::*;

/// Event emitted when the payout config is created
#[event]
pub struct PayoutConfigInitialized {
    /// Payout config PDA
    pub config: Pubkey,
    /// Administrator allowed to change the fee rate
    pub admin: Pubkey,
    /// Initial fee rate in basis points
    pub fee_bps: u16,
    /// Wallet receiving every payout fee
    pub fee_wallet: Pubkey,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted when the administrator changes the fee rate
#[event]
pub struct FeeRateUpdated {
    pub admin: Pubkey,
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
    pub timestamp: i64,
}

/// Event emitted after a batch payout has been committed
#[event]
pub struct BatchPayoutExecuted {
    /// Signer that funded the batch
    pub sender: Pubkey,
    /// Token mint, `None` for native lamport payouts
    pub mint: Option<Pubkey>,
    /// Number of recipient transfers in the batch
    pub recipients_count: u32,
    /// Sum of all recipient amounts
    pub total_amount: u64,
    /// Fee routed to the fee wallet
    pub fee: u64,
    /// Fee rate applied, in basis points
    pub fee_bps: u16,
    /// Timestamp of the payout
    pub timestamp: i64,
}
