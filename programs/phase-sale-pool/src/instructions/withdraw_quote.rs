use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::*,
    errors::SalePoolError,
    events::QuoteWithdrawn,
    ledger,
    state::SalePool,
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct WithdrawQuote<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, SalePool>>,

    /// CHECK: PDA derivation
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool_id.as_ref()],
        bump = pool.authority_bump
    )]
    pub pool_authority: AccountInfo<'info>,

    #[account(
        mut,
        constraint = quote_treasury.key() == pool.quote_treasury
    )]
    pub quote_treasury: Box<Account<'info, TokenAccount>>,

    /// Owner's quote token account
    #[account(
        mut,
        constraint = owner_quote_account.mint == pool.quote_mint @ SalePoolError::InvalidMint,
        constraint = owner_quote_account.key() != quote_treasury.key() @ SalePoolError::InvalidDestination
    )]
    pub owner_quote_account: Box<Account<'info, TokenAccount>>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw_quote(ctx: Context<WithdrawQuote>, pool_id: [u8; 32], amount: u64) -> Result<()> {
    ctx.accounts.pool.require_owner(&ctx.accounts.owner.key())?;
    ctx.accounts
        .pool
        .check_withdrawal(amount, ctx.accounts.quote_treasury.amount)?;

    let seeds = ctx.accounts.pool.authority_seeds();
    ledger::transfer_from_pool(
        &ctx.accounts.token_program,
        &ctx.accounts.quote_treasury,
        &ctx.accounts.owner_quote_account,
        &ctx.accounts.pool_authority,
        &[&seeds[..]],
        amount,
    )?;

    ctx.accounts.pool.record_withdrawal(amount)?;
    ctx.accounts.quote_treasury.reload()?;

    emit!(QuoteWithdrawn {
        pool_id,
        recipient: ctx.accounts.owner_quote_account.key(),
        amount,
        treasury_balance_after: ctx.accounts.quote_treasury.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
