use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::SalePoolError,
    events::OwnershipTransferred,
    state::SalePool,
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, SalePool>>,

    pub owner: Signer<'info>,
}

pub fn transfer_ownership(
    ctx: Context<TransferOwnership>,
    pool_id: [u8; 32],
    new_owner: Pubkey,
) -> Result<()> {
    ctx.accounts.pool.require_owner(&ctx.accounts.owner.key())?;
    require!(new_owner != Pubkey::default(), SalePoolError::InvalidOwner);

    let pool = &mut ctx.accounts.pool;
    let previous_owner = pool.owner;
    pool.owner = new_owner;

    emit!(OwnershipTransferred {
        pool_id,
        previous_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
