use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::PhaseTimingUpdated,
    state::{PhaseSchedule, SalePool},
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct SetPhaseTiming<'info> {
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

pub fn set_phase_timing(
    ctx: Context<SetPhaseTiming>,
    pool_id: [u8; 32],
    phase_index: u8,
    start_time: i64,
    end_time: i64,
) -> Result<()> {
    ctx.accounts.pool.require_owner(&ctx.accounts.owner.key())?;
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts
        .phase_schedule
        .set_timing(phase_index as usize, start_time, end_time, now)?;

    emit!(PhaseTimingUpdated {
        pool_id,
        phase_index,
        start_time,
        end_time,
        timestamp: now,
    });

    Ok(())
}
