use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::RewardParametersUpdated,
    state::{RewardConfig, SalePool},
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct SetRewardParameters<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, SalePool>>,

    pub owner: Signer<'info>,
}

pub fn set_reward_parameters(
    ctx: Context<SetRewardParameters>,
    pool_id: [u8; 32],
    enabled: bool,
    rate_bps: u16,
    interval_seconds: i64,
) -> Result<()> {
    ctx.accounts.pool.require_owner(&ctx.accounts.owner.key())?;
    ctx.accounts.pool.reward_config = RewardConfig::new(enabled, rate_bps, interval_seconds)?;

    emit!(RewardParametersUpdated {
        pool_id,
        enabled,
        rate_bps,
        interval_seconds,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
