use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::PhaseConfigured,
    state::{PhaseSchedule, SalePool},
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct ConfigurePhase<'info> {
    #[account(
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

    pub owner: Signer<'info>,
}

pub fn configure_phase(
    ctx: Context<ConfigurePhase>,
    pool_id: [u8; 32],
    phase_index: u8,
    price: u64,
    allocation: u64,
) -> Result<()> {
    ctx.accounts.pool.require_owner(&ctx.accounts.owner.key())?;
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts
        .phase_schedule
        .configure(phase_index as usize, price, allocation, now)?;

    emit!(PhaseConfigured {
        pool_id,
        phase_index,
        price,
        allocation,
        timestamp: now,
    });

    Ok(())
}
