use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::*,
    errors::SalePoolError,
    events::RewardClaimed,
    ledger,
    state::{BuyerAccount, SalePool},
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct ClaimReward<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, SalePool>>,

    #[account(
        mut,
        seeds = [BUYER_SEED, pool_id.as_ref(), buyer.key().as_ref()],
        bump = buyer_account.bump,
        constraint = buyer_account.pool == pool.key()
    )]
    pub buyer_account: Box<Account<'info, BuyerAccount>>,

    /// CHECK: PDA derivation
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool_id.as_ref()],
        bump = pool.authority_bump
    )]
    pub pool_authority: AccountInfo<'info>,

    /// Program-owned quote treasury the reward is paid from
    #[account(
        mut,
        constraint = quote_treasury.key() == pool.quote_treasury
    )]
    pub quote_treasury: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = buyer_quote_account.mint == pool.quote_mint @ SalePoolError::InvalidMint,
        constraint = buyer_quote_account.key() != quote_treasury.key() @ SalePoolError::InvalidDestination
    )]
    pub buyer_quote_account: Box<Account<'info, TokenAccount>>,

    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn claim_reward(ctx: Context<ClaimReward>, pool_id: [u8; 32]) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let reward_config = ctx.accounts.pool.reward_config;

    let accrued_quote_spend = ctx.accounts.buyer_account.accrued_quote_spend;
    let reward = ctx
        .accounts
        .buyer_account
        .claimable_reward(&reward_config, now)?;

    let seeds = ctx.accounts.pool.authority_seeds();
    ledger::transfer_from_pool(
        &ctx.accounts.token_program,
        &ctx.accounts.quote_treasury,
        &ctx.accounts.buyer_quote_account,
        &ctx.accounts.pool_authority,
        &[&seeds[..]],
        reward,
    )?;

    ctx.accounts.buyer_account.settle_claim(reward, now)?;
    ctx.accounts.pool.record_reward(reward)?;

    emit!(RewardClaimed {
        pool_id,
        buyer: ctx.accounts.buyer.key(),
        reward,
        accrued_quote_spend,
        rate_bps: reward_config.rate_bps,
        timestamp: now,
    });

    Ok(())
}
