use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;

use instructions::*;

declare_id!("2Y7hAMNa4xfaohUK2KHi4VZGScgMXrDC9xJwUy1rbyNp");

#[program]
pub mod phase_sale_pool {
    use super::*;

    /// Create the pool, its phase schedule and the program-owned token accounts
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        pool_id: [u8; 32],
        params: InitializePoolParams,
    ) -> Result<()> {
        instructions::initialize_pool(ctx, pool_id, params)
    }

    /// Deposit sale tokens into the pool inventory
    pub fn fund_inventory(ctx: Context<FundInventory>, pool_id: [u8; 32], amount: u64) -> Result<()> {
        instructions::fund_inventory(ctx, pool_id, amount)
    }

    /// Set the sale window of a phase (owner only, before it starts)
    pub fn set_phase_timing(
        ctx: Context<SetPhaseTiming>,
        pool_id: [u8; 32],
        phase_index: u8,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        instructions::set_phase_timing(ctx, pool_id, phase_index, start_time, end_time)
    }

    /// Reprice or resize a phase (owner only, before it starts)
    pub fn configure_phase(
        ctx: Context<ConfigurePhase>,
        pool_id: [u8; 32],
        phase_index: u8,
        price: u64,
        allocation: u64,
    ) -> Result<()> {
        instructions::configure_phase(ctx, pool_id, phase_index, price, allocation)
    }

    pub fn set_purchase_limits(
        ctx: Context<SetPurchaseLimits>,
        pool_id: [u8; 32],
        min_amount: u64,
        max_amount: u64,
    ) -> Result<()> {
        instructions::set_purchase_limits(ctx, pool_id, min_amount, max_amount)
    }

    pub fn set_reward_parameters(
        ctx: Context<SetRewardParameters>,
        pool_id: [u8; 32],
        enabled: bool,
        rate_bps: u16,
        interval_seconds: i64,
    ) -> Result<()> {
        instructions::set_reward_parameters(ctx, pool_id, enabled, rate_bps, interval_seconds)
    }

    /// Buy sale tokens from the active phase
    pub fn purchase(ctx: Context<Purchase>, pool_id: [u8; 32], sale_units: u64) -> Result<()> {
        instructions::purchase(ctx, pool_id, sale_units)
    }

    /// Pay out the reward accrued since the last claim (once per interval)
    pub fn claim_reward(ctx: Context<ClaimReward>, pool_id: [u8; 32]) -> Result<()> {
        instructions::claim_reward(ctx, pool_id)
    }

    /// Withdraw collected quote tokens to the owner
    pub fn withdraw_quote(ctx: Context<WithdrawQuote>, pool_id: [u8; 32], amount: u64) -> Result<()> {
        instructions::withdraw_quote(ctx, pool_id, amount)
    }

    /// Return the unsold allocation of an ended phase to the owner
    pub fn recover_unsold(
        ctx: Context<RecoverUnsold>,
        pool_id: [u8; 32],
        phase_index: u8,
    ) -> Result<()> {
        instructions::recover_unsold(ctx, pool_id, phase_index)
    }

    pub fn transfer_ownership(
        ctx: Context<TransferOwnership>,
        pool_id: [u8; 32],
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_ownership(ctx, pool_id, new_owner)
    }
}
