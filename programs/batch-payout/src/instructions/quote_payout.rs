use anchor_lang::prelude::*;
use crate::constants::PAYOUT_CONFIG_SEED;
use crate::states::PayoutConfig;
use crate::utils::{quote_amounts, PayoutQuote};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct QuotePayoutParams {
    pub amounts: Vec<u64>,
}

/// Read-only: exact funding a batch needs at the current fee rate
#[derive(Accounts)]
pub struct QuotePayout<'info> {
    #[account(
        seeds = [PAYOUT_CONFIG_SEED],
        bump = payout_config.bump
    )]
    pub payout_config: Account<'info, PayoutConfig>,
}

impl<'info> QuotePayout<'info> {
    pub fn handle(ctx: Context<QuotePayout>, params: QuotePayoutParams) -> Result<PayoutQuote> {
        let quote = quote_amounts(&params.amounts, ctx.accounts.payout_config.fee_bps)?;

        msg!("Payout quote for {} recipients:", params.amounts.len());
        msg!("Total: {}", quote.total);
        msg!("Fee: {} ({} bps)", quote.fee, quote.fee_bps);
        msg!("Required: {}", quote.required);

        Ok(quote)
    }
}
