use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::*,
    errors::SalePoolError,
    events::PoolInitialized,
    state::{PhaseConfig, PhaseSchedule, PurchaseLimits, RewardConfig, SalePool},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializePoolParams {
    /// Price and allocation per phase, in sale order
    pub phases: Vec<PhaseConfig>,
    pub min_purchase: u64,
    pub max_purchase: u64,
}

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = owner,
        space = SalePool::LEN,
        seeds = [POOL_SEED, pool_id.as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, SalePool>>,

    #[account(
        init,
        payer = owner,
        space = PhaseSchedule::LEN,
        seeds = [PHASE_SCHEDULE_SEED, pool_id.as_ref()],
        bump
    )]
    pub phase_schedule: Box<Account<'info, PhaseSchedule>>,

    /// PDA that will own the sale vault and quote treasury
    /// CHECK: derived and used as authority only
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool_id.as_ref()],
        bump
    )]
    pub pool_authority: AccountInfo<'info>,

    /// The token being sold
    pub sale_mint: Box<Account<'info, Mint>>,

    /// The token buyers pay with (usually USDT)
    #[account(constraint = quote_mint.key() != sale_mint.key() @ SalePoolError::InvalidMint)]
    pub quote_mint: Box<Account<'info, Mint>>,

    /// Program-owned sale inventory ATA
    #[account(
        init,
        payer = owner,
        associated_token::mint = sale_mint,
        associated_token::authority = pool_authority,
    )]
    pub sale_vault: Box<Account<'info, TokenAccount>>,

    /// Program-owned quote collection ATA
    #[account(
        init,
        payer = owner,
        associated_token::mint = quote_mint,
        associated_token::authority = pool_authority,
    )]
    pub quote_treasury: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_pool(
    ctx: Context<InitializePool>,
    pool_id: [u8; 32],
    params: InitializePoolParams,
) -> Result<()> {
    let limits = PurchaseLimits::new(params.min_purchase, params.max_purchase)?;

    let phase_schedule = &mut ctx.accounts.phase_schedule;
    phase_schedule.init_phases(&params.phases)?;
    phase_schedule.pool = ctx.accounts.pool.key();
    phase_schedule.bump = ctx.bumps.phase_schedule;

    let pool = &mut ctx.accounts.pool;
    pool.pool_id = pool_id;
    pool.owner = ctx.accounts.owner.key();
    pool.sale_mint = ctx.accounts.sale_mint.key();
    pool.quote_mint = ctx.accounts.quote_mint.key();
    pool.sale_decimals = ctx.accounts.sale_mint.decimals;
    pool.pool_authority = ctx.accounts.pool_authority.key();
    pool.sale_vault = ctx.accounts.sale_vault.key();
    pool.quote_treasury = ctx.accounts.quote_treasury.key();
    pool.phase_schedule = phase_schedule.key();
    pool.limits = limits;
    pool.reward_config = RewardConfig::default();
    pool.bump = ctx.bumps.pool;
    pool.authority_bump = ctx.bumps.pool_authority;

    emit!(PoolInitialized {
        pool_id,
        owner: pool.owner,
        sale_mint: pool.sale_mint,
        quote_mint: pool.quote_mint,
        phase_count: phase_schedule.phases.len() as u8,
        min_purchase: limits.min_amount,
        max_purchase: limits.max_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
