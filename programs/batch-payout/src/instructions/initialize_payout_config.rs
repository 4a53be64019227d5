use anchor_lang::prelude::*;
use crate::constants::{PAYOUT_CONFIG_SEED, FEE_WALLET};
use crate::errors::PayoutError;
use crate::states::PayoutConfig;

#[derive(Accounts)]
pub struct InitializePayoutConfig<'info> {
    /// Deployer, becomes the administrator
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Payout configuration PDA
    #[account(
        init,
        payer = admin,
        space = PayoutConfig::DISCRIMINATOR.len() + PayoutConfig::INIT_SPACE,
        seeds = [PAYOUT_CONFIG_SEED],
        bump
    )]
    pub payout_config: Account<'info, PayoutConfig>,

    /// CHECK: Fixed fee collection wallet, topped up to the rent-exempt minimum
    #[account(
        mut,
        address = FEE_WALLET @ PayoutError::TransferFailed
    )]
    pub fee_wallet: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePayoutConfig<'info> {
    pub fn handle(ctx: Context<InitializePayoutConfig>) -> Result<()> {
        msg!("Initializing payout configuration");

        let config_key = ctx.accounts.payout_config.key();
        let admin = ctx.accounts.admin.key();

        ctx.accounts
            .payout_config
            .set_inner(PayoutConfig::new(admin, ctx.bumps.payout_config));

        fund_fee_wallet(&ctx)?;

        let fee_bps = ctx.accounts.payout_config.fee_bps;

        msg!("Administrator: {}", admin);
        msg!("Fee rate: {} bps", fee_bps);
        msg!("Fee wallet: {}", FEE_WALLET);

        emit!(crate::events::PayoutConfigInitialized {
            config: config_key,
            admin,
            fee_bps,
            fee_wallet: FEE_WALLET,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

/// Fees below the rent-exempt minimum cannot land in an empty wallet, so
/// the admin pays the shortfall once up front.
fn fund_fee_wallet(ctx: &Context<InitializePayoutConfig>) -> Result<()> {
    let fee_wallet = ctx.accounts.fee_wallet.to_account_info();
    let minimum = Rent::get()?.minimum_balance(fee_wallet.data_len());
    let shortfall = minimum.saturating_sub(fee_wallet.lamports());

    if shortfall == 0 {
        return Ok(());
    }

    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.admin.to_account_info(),
                to: fee_wallet,
            },
        ),
        shortfall,
    )?;

    msg!("Fee wallet funded with {} lamports", shortfall);
    Ok(())
}
