use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{PAYOUT_CONFIG_SEED, FEE_WALLET};
use crate::errors::PayoutError;
use crate::states::PayoutConfig;
use crate::utils::{validate_payout_request, AccountSnapshot, TransferBatch};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DistributeTokenParams {
    /// Recipient token accounts, matched in order against the remaining accounts
    pub recipients: Vec<Pubkey>,
    /// Token base units for each recipient
    pub amounts: Vec<u64>,
    /// Units the sender commits to this batch (must equal total + fee)
    pub supplied_funds: u64,
}

/// SPL token batch payout
#[derive(Accounts)]
pub struct DistributeToken<'info> {
    pub sender: Signer<'info>,

    #[account(
        seeds = [PAYOUT_CONFIG_SEED],
        bump = payout_config.bump
    )]
    pub payout_config: Account<'info, PayoutConfig>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = sender
    )]
    pub sender_token_account: Box<Account<'info, TokenAccount>>,

    /// Fee wallet's token account for this mint
    #[account(
        mut,
        token::mint = mint,
        constraint = fee_token_account.owner == FEE_WALLET @ PayoutError::TransferFailed
    )]
    pub fee_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    // Remaining accounts: one writable token account of `mint` per recipient, same order
}

impl<'info> DistributeToken<'info> {
    pub fn handle(
        ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
        params: DistributeTokenParams,
    ) -> Result<()> {
        let mint = ctx.accounts.mint.key();

        msg!("Processing token batch payout from: {}", ctx.accounts.sender.key());
        msg!("Mint: {}", mint);
        msg!("Recipients: {}", params.recipients.len());
        msg!("Supplied: {} units", params.supplied_funds);

        let fee_bps = ctx.accounts.payout_config.fee_bps;
        let quote = validate_payout_request(
            params.recipients.len(),
            &params.amounts,
            fee_bps,
            params.supplied_funds,
        )?;

        let batch = stage_token_transfers(&ctx, &params, quote.fee)?;

        batch.commit(None, |destination, amount| {
            anchor_spl::token::transfer(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    anchor_spl::token::Transfer {
                        from: ctx.accounts.sender_token_account.to_account_info(),
                        to: destination.clone(),
                        authority: ctx.accounts.sender.to_account_info(),
                    },
                ),
                amount,
            )
        })?;

        msg!("Distributed {} units, fee {} units ({} bps)", quote.total, quote.fee, fee_bps);

        let recipients_count = u32::try_from(params.recipients.len())
            .map_err(|_| PayoutError::ArithmeticOverflow)?;

        emit!(crate::events::BatchPayoutExecuted {
            sender: ctx.accounts.sender.key(),
            mint: Some(mint),
            recipients_count,
            total_amount: quote.total,
            fee: quote.fee,
            fee_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

/// Snapshot of a token account with its token balance in place of lamports.
fn token_snapshot(info: &AccountInfo, token_account: &TokenAccount) -> AccountSnapshot {
    AccountSnapshot::from_account_info(info).with_balance(token_account.amount)
}

fn stage_token_transfers<'info>(
    ctx: &Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
    params: &DistributeTokenParams,
    fee: u64,
) -> Result<TransferBatch<AccountInfo<'info>>> {
    require!(
        ctx.remaining_accounts.len() == params.recipients.len(),
        PayoutError::TransferFailed
    );

    let mint = ctx.accounts.mint.key();

    let sender_account = &ctx.accounts.sender_token_account;
    require!(!sender_account.is_frozen(), PayoutError::TransferFailed);
    let mut batch = TransferBatch::new(token_snapshot(
        &sender_account.to_account_info(),
        sender_account,
    ));

    let recipients = params.recipients.iter().zip(params.amounts.iter());
    for ((recipient, amount), info) in recipients.zip(ctx.remaining_accounts.iter()) {
        require_keys_eq!(info.key(), *recipient, PayoutError::TransferFailed);

        let token_account = Account::<'info, TokenAccount>::try_from(info)
            .map_err(|_| error!(PayoutError::TransferFailed))?;
        require_keys_eq!(token_account.mint, mint, PayoutError::TransferFailed);
        require!(!token_account.is_frozen(), PayoutError::TransferFailed);

        batch.stage(info.clone(), token_snapshot(info, &token_account), *amount)?;
    }

    let fee_account = &ctx.accounts.fee_token_account;
    require!(!fee_account.is_frozen(), PayoutError::TransferFailed);
    let fee_info = fee_account.to_account_info();
    let fee_snapshot = token_snapshot(&fee_info, fee_account);
    batch.stage(fee_info, fee_snapshot, fee)?;

    Ok(batch)
}
