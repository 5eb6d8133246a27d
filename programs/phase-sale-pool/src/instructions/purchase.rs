use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::*,
    errors::SalePoolError,
    events::TokensPurchased,
    ledger,
    state::{BuyerAccount, PhaseSchedule, PurchaseQuote, SalePool},
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct Purchase<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, SalePool>>,

    #[account(
        mut,
        seeds = [PHASE_SCHEDULE_SEED, pool_id.as_ref()],
        bump = phase_schedule.bump,
        constraint = phase_schedule.key() == pool.phase_schedule
    )]
    pub phase_schedule: Box<Account<'info, PhaseSchedule>>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = BuyerAccount::LEN,
        seeds = [BUYER_SEED, pool_id.as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub buyer_account: Box<Account<'info, BuyerAccount>>,

    /// CHECK: PDA derivation
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool_id.as_ref()],
        bump = pool.authority_bump
    )]
    pub pool_authority: AccountInfo<'info>,

    #[account(
        mut,
        constraint = sale_vault.key() == pool.sale_vault
    )]
    pub sale_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = quote_treasury.key() == pool.quote_treasury
    )]
    pub quote_treasury: Box<Account<'info, TokenAccount>>,

    /// Buyer's quote token account, debited for the cost
    #[account(
        mut,
        constraint = buyer_quote_account.mint == pool.quote_mint @ SalePoolError::InvalidMint
    )]
    pub buyer_quote_account: Box<Account<'info, TokenAccount>>,

    /// Buyer's sale token account, credited with the purchase
    #[account(
        mut,
        constraint = buyer_sale_account.mint == pool.sale_mint @ SalePoolError::InvalidMint,
        constraint = buyer_sale_account.key() != sale_vault.key() @ SalePoolError::InvalidDestination
    )]
    pub buyer_sale_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn purchase(ctx: Context<Purchase>, pool_id: [u8; 32], sale_units: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let PurchaseQuote {
        phase_index,
        quote_cost,
        ..
    } = ctx
        .accounts
        .pool
        .quote_purchase(&ctx.accounts.phase_schedule, sale_units, now)?;

    // Both legs are checked before either moves
    ledger::authorize(
        &ctx.accounts.buyer_quote_account,
        &ctx.accounts.buyer.key(),
        quote_cost,
    )?;
    ledger::authorize(
        &ctx.accounts.sale_vault,
        &ctx.accounts.pool_authority.key(),
        sale_units,
    )?;

    ledger::transfer_from_holder(
        &ctx.accounts.token_program,
        &ctx.accounts.buyer_quote_account,
        &ctx.accounts.quote_treasury,
        &ctx.accounts.buyer,
        quote_cost,
    )?;

    let seeds = ctx.accounts.pool.authority_seeds();
    ledger::transfer_from_pool(
        &ctx.accounts.token_program,
        &ctx.accounts.sale_vault,
        &ctx.accounts.buyer_sale_account,
        &ctx.accounts.pool_authority,
        &[&seeds[..]],
        sale_units,
    )?;

    let sold_after = ctx
        .accounts
        .phase_schedule
        .record_sale(phase_index, sale_units)?;

    let buyer_account = &mut ctx.accounts.buyer_account;
    if !buyer_account.is_initialized() {
        buyer_account.open(
            ctx.accounts.pool.key(),
            ctx.accounts.buyer.key(),
            ctx.bumps.buyer_account,
            now,
        );
    }
    buyer_account.record_purchase(sale_units, quote_cost)?;

    ctx.accounts.pool.record_sale(sale_units, quote_cost)?;

    emit!(TokensPurchased {
        pool_id,
        buyer: ctx.accounts.buyer.key(),
        phase_index: phase_index as u8,
        sale_units,
        quote_cost,
        phase_sold_after: sold_after,
        timestamp: now,
    });

    Ok(())
}
