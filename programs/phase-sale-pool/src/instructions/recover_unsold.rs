use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::*,
    errors::SalePoolError,
    events::UnsoldRecovered,
    ledger,
    state::{PhaseSchedule, SalePool},
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct RecoverUnsold<'info> {
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

    /// Owner's sale token account
    #[account(
        mut,
        constraint = owner_sale_account.mint == pool.sale_mint @ SalePoolError::InvalidMint,
        constraint = owner_sale_account.key() != sale_vault.key() @ SalePoolError::InvalidDestination
    )]
    pub owner_sale_account: Box<Account<'info, TokenAccount>>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn recover_unsold(ctx: Context<RecoverUnsold>, pool_id: [u8; 32], phase_index: u8) -> Result<()> {
    ctx.accounts.pool.require_owner(&ctx.accounts.owner.key())?;
    let now = Clock::get()?.unix_timestamp;

    let already_recovered = ctx
        .accounts
        .phase_schedule
        .phase(phase_index as usize)?
        .recovered;
    let amount = ctx
        .accounts
        .phase_schedule
        .take_unsold(phase_index as usize, now)?;

    // A phase recovered earlier yields zero and moves nothing
    let seeds = ctx.accounts.pool.authority_seeds();
    ledger::transfer_from_pool(
        &ctx.accounts.token_program,
        &ctx.accounts.sale_vault,
        &ctx.accounts.owner_sale_account,
        &ctx.accounts.pool_authority,
        &[&seeds[..]],
        amount,
    )?;

    ctx.accounts.pool.record_recovery(amount)?;

    emit!(UnsoldRecovered {
        pool_id,
        phase_index,
        amount,
        already_recovered,
        timestamp: now,
    });

    Ok(())
}
