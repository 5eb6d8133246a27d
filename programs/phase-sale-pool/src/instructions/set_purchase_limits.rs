use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::PurchaseLimitsUpdated,
    state::{PurchaseLimits, SalePool},
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct SetPurchaseLimits<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, SalePool>>,

    pub owner: Signer<'info>,
}

pub fn set_purchase_limits(
    ctx: Context<SetPurchaseLimits>,
    pool_id: [u8; 32],
    min_amount: u64,
    max_amount: u64,
) -> Result<()> {
    ctx.accounts.pool.require_owner(&ctx.accounts.owner.key())?;
    ctx.accounts.pool.limits = PurchaseLimits::new(min_amount, max_amount)?;

    emit!(PurchaseLimitsUpdated {
        pool_id,
        min_amount,
        max_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
