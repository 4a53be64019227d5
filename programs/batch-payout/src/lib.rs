use anchor_lang::prelude::*;

declare_id!("BPay1U5xY3jvSGkp7Qq3GkFQ2s8kqW9zYDvTQd4LQz9N");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod utils;

pub use instructions::*;
pub use events::*;
pub use utils::PayoutQuote;

#[program]
pub mod batch_payout {
    use super::*;

    pub fn initialize_payout_config(ctx: Context<InitializePayoutConfig>) -> Result<()> {
        InitializePayoutConfig::handle(ctx)
    }

    pub fn distribute<'info>(
        ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
        params: DistributeParams,
    ) -> Result<()> {
        Distribute::handle(ctx, params)
    }

    pub fn distribute_token<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
        params: DistributeTokenParams,
    ) -> Result<()> {
        DistributeToken::handle(ctx, params)
    }

    pub fn set_fee_rate(ctx: Context<SetFeeRate>, params: SetFeeRateParams) -> Result<()> {
        SetFeeRate::handle(ctx, params)
    }

    pub fn quote_payout(ctx: Context<QuotePayout>, params: QuotePayoutParams) -> Result<PayoutQuote> {
        QuotePayout::handle(ctx, params)
    }
}
