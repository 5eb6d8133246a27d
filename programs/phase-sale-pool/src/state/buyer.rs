use anchor_lang::prelude::*;

use crate::{errors::SalePoolError, math, state::RewardConfig};

#[account]
#[derive(Default)]
pub struct BuyerAccount {
    /// Associated pool
    pub pool: Pubkey,

    /// Buyer wallet address
    pub buyer: Pubkey,

    /// Cumulative sale base units bought
    pub purchased_sale_units: u64,

    /// Quote spent since the last reward claim (the accrual bucket)
    pub accrued_quote_spend: u64,

    /// Lifetime quote spent
    pub total_quote_spent: u64,

    /// Lifetime rewards received
    pub total_rewards_claimed: u64,

    /// Last claim timestamp, or the first purchase for a buyer who never claimed
    pub last_claim_ts: i64,

    /// Number of purchases made
    pub purchase_count: u32,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl BuyerAccount {
    pub const LEN: usize = 8 + // discriminator
        32 + // pool
        32 + // buyer
        8 + // purchased_sale_units
        8 + // accrued_quote_spend
        8 + // total_quote_spent
        8 + // total_rewards_claimed
        8 + // last_claim_ts
        4 + // purchase_count
        1 + // bump
        32; // _reserved

    pub fn is_initialized(&self) -> bool {
        self.buyer != Pubkey::default()
    }

    /// Bind a freshly created account to its pool and buyer. The reward
    /// interval of a first claim is measured from this purchase.
    pub fn open(&mut self, pool: Pubkey, buyer: Pubkey, bump: u8, now: i64) {
        self.pool = pool;
        self.buyer = buyer;
        self.last_claim_ts = now;
        self.bump = bump;
    }

    pub fn record_purchase(&mut self, sale_units: u64, quote_cost: u64) -> Result<()> {
        self.purchased_sale_units = self
            .purchased_sale_units
            .checked_add(sale_units)
            .ok_or(SalePoolError::MathOverflow)?;
        self.accrued_quote_spend = self
            .accrued_quote_spend
            .checked_add(quote_cost)
            .ok_or(SalePoolError::MathOverflow)?;
        self.total_quote_spent = self
            .total_quote_spent
            .checked_add(quote_cost)
            .ok_or(SalePoolError::MathOverflow)?;
        self.purchase_count = self.purchase_count.saturating_add(1);

        Ok(())
    }

    pub fn can_claim(&self, interval_seconds: i64, now: i64) -> bool {
        now.saturating_sub(self.last_claim_ts) >= interval_seconds
    }

    /// Reward owed right now under `config`. Does not mutate the bucket.
    pub fn claimable_reward(&self, config: &RewardConfig, now: i64) -> Result<u64> {
        require!(config.enabled, SalePoolError::RewardsDisabled);
        require!(
            self.can_claim(config.interval_seconds, now),
            SalePoolError::RewardIntervalNotMet
        );

        let reward = math::bps_share(self.accrued_quote_spend, config.rate_bps)?;
        require!(reward > 0, SalePoolError::NoRewardAccrued);

        Ok(reward)
    }

    /// Drain the accrual bucket after `reward` has been paid.
    pub fn settle_claim(&mut self, reward: u64, now: i64) -> Result<()> {
        self.total_rewards_claimed = self
            .total_rewards_claimed
            .checked_add(reward)
            .ok_or(SalePoolError::MathOverflow)?;
        self.accrued_quote_spend = 0;
        self.last_claim_ts = now;

        Ok(())
    }
}
