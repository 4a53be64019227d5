use anchor_lang::prelude::*;
use crate::constants::{PAYOUT_CONFIG_SEED, FEE_WALLET};
use crate::errors::PayoutError;
use crate::states::PayoutConfig;
use crate::utils::{validate_payout_request, AccountSnapshot, TransferBatch};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DistributeParams {
    /// Recipient wallets, matched in order against the remaining accounts
    pub recipients: Vec<Pubkey>,
    /// Lamports for each recipient
    pub amounts: Vec<u64>,
    /// Lamports the sender commits to this batch (must equal total + fee)
    pub supplied_funds: u64,
}

/// Native SOL batch payout
#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(
        seeds = [PAYOUT_CONFIG_SEED],
        bump = payout_config.bump
    )]
    pub payout_config: Account<'info, PayoutConfig>,

    /// CHECK: Fixed fee collection wallet, only credited
    #[account(
        mut,
        address = FEE_WALLET @ PayoutError::TransferFailed
    )]
    pub fee_wallet: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    // Remaining accounts: one writable account per recipient, same order
}

impl<'info> Distribute<'info> {
    pub fn handle(
        ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
        params: DistributeParams,
    ) -> Result<()> {
        msg!("Processing batch payout from: {}", ctx.accounts.sender.key());
        msg!("Recipients: {}", params.recipients.len());
        msg!("Supplied: {} lamports", params.supplied_funds);

        let fee_bps = ctx.accounts.payout_config.fee_bps;
        let quote = validate_payout_request(
            params.recipients.len(),
            &params.amounts,
            fee_bps,
            params.supplied_funds,
        )?;

        let batch = stage_transfers(&ctx, &params, quote.fee)?;

        let rent = Rent::get()?;
        let debited = batch.commit(Some(&rent), |destination, amount| {
            anchor_lang::system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    anchor_lang::system_program::Transfer {
                        from: ctx.accounts.sender.to_account_info(),
                        to: destination.clone(),
                    },
                ),
                amount,
            )
        })?;

        msg!("Distributed {} lamports, fee {} lamports ({} bps)", quote.total, quote.fee, fee_bps);
        msg!("Sender debited: {} lamports", debited);

        let recipients_count = u32::try_from(params.recipients.len())
            .map_err(|_| PayoutError::ArithmeticOverflow)?;

        emit!(crate::events::BatchPayoutExecuted {
            sender: ctx.accounts.sender.key(),
            mint: None,
            recipients_count,
            total_amount: quote.total,
            fee: quote.fee,
            fee_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

/// Stages every recipient transfer followed by the fee transfer.
fn stage_transfers<'info>(
    ctx: &Context<'_, '_, 'info, 'info, Distribute<'info>>,
    params: &DistributeParams,
    fee: u64,
) -> Result<TransferBatch<AccountInfo<'info>>> {
    require!(
        ctx.remaining_accounts.len() == params.recipients.len(),
        PayoutError::TransferFailed
    );

    let sender = ctx.accounts.sender.to_account_info();
    let mut batch = TransferBatch::new(AccountSnapshot::from_account_info(&sender));

    let recipients = params.recipients.iter().zip(params.amounts.iter());
    for ((recipient, amount), account) in recipients.zip(ctx.remaining_accounts.iter()) {
        require_keys_eq!(account.key(), *recipient, PayoutError::TransferFailed);
        batch.stage(
            account.clone(),
            AccountSnapshot::from_account_info(account),
            *amount,
        )?;
    }

    let fee_wallet = ctx.accounts.fee_wallet.to_account_info();
    let fee_snapshot = AccountSnapshot::from_account_info(&fee_wallet);
    batch.stage(fee_wallet, fee_snapshot, fee)?;

    Ok(batch)
}
