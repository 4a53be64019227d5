use anchor_lang::prelude::*;
use crate::constants::{DEFAULT_FEE_BPS, MAX_FEE_BPS};
use crate::errors::PayoutError;

/// Fee configuration shared by every payout
#[account]
#[derive(InitSpace)]
pub struct PayoutConfig {
    /// Only key allowed to change the fee rate
    pub admin: Pubkey,
    /// Fee rate in basis points (1 = 0.01%)
    pub fee_bps: u16,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl PayoutConfig {
    pub fn new(admin: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            fee_bps: DEFAULT_FEE_BPS,
            bump,
        }
    }

    pub fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    /// Replaces the fee rate, returning the previous value
    pub fn set_fee_bps(&mut self, new_fee_bps: u16) -> Result<u16> {
        require!(new_fee_bps <= MAX_FEE_BPS, PayoutError::InvalidFeeRate);

        let old_fee_bps = self.fee_bps;
        self.fee_bps = new_fee_bps;
        Ok(old_fee_bps)
    }
}
