use anchor_lang::prelude::*;
use crate::constants::PAYOUT_CONFIG_SEED;
use crate::errors::PayoutError;
use crate::states::PayoutConfig;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct SetFeeRateParams {
    /// New fee rate in basis points
    pub fee_bps: u16,
}

/// Administrator-only fee rate change
#[derive(Accounts)]
pub struct SetFeeRate<'info> {
    #[account(
        constraint = payout_config.is_admin(&admin.key()) @ PayoutError::Unauthorized
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PAYOUT_CONFIG_SEED],
        bump = payout_config.bump
    )]
    pub payout_config: Account<'info, PayoutConfig>,
}

impl<'info> SetFeeRate<'info> {
    pub fn handle(ctx: Context<SetFeeRate>, params: SetFeeRateParams) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        let payout_config = &mut ctx.accounts.payout_config;

        let old_fee_bps = payout_config.set_fee_bps(params.fee_bps)?;

        msg!("Fee rate changed: {} -> {} bps", old_fee_bps, params.fee_bps);

        emit!(crate::events::FeeRateUpdated {
            admin,
            old_fee_bps,
            new_fee_bps: params.fee_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
