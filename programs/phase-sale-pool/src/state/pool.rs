use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_BPS, POOL_AUTHORITY_SEED},
    errors::SalePoolError,
    math,
    state::PhaseSchedule,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurchaseLimits {
    /// Smallest purchase in sale base units
    pub min_amount: u64,

    /// Largest purchase in sale base units, per call
    pub max_amount: u64,
}

impl PurchaseLimits {
    pub const LEN: usize = 8 + 8;

    pub fn new(min_amount: u64, max_amount: u64) -> Result<Self> {
        require!(min_amount <= max_amount, SalePoolError::InvalidPurchaseLimits);
        Ok(Self {
            min_amount,
            max_amount,
        })
    }

    pub fn check(&self, sale_units: u64) -> Result<()> {
        require!(
            sale_units >= self.min_amount,
            SalePoolError::BelowMinimumPurchase
        );
        require!(
            sale_units <= self.max_amount,
            SalePoolError::ExceedsMaximumPurchase
        );
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardConfig {
    pub enabled: bool,

    /// Reward share of accrued spend in basis points (max 10000)
    pub rate_bps: u16,

    /// Minimum seconds between claims
    pub interval_seconds: i64,
}

impl RewardConfig {
    pub const LEN: usize = 1 + 2 + 8;

    pub fn new(enabled: bool, rate_bps: u16, interval_seconds: i64) -> Result<Self> {
        require!(rate_bps <= MAX_BPS, SalePoolError::InvalidRewardRate);
        require!(!enabled || rate_bps > 0, SalePoolError::InvalidRewardRate);
        require!(
            !enabled || interval_seconds > 0,
            SalePoolError::InvalidRewardInterval
        );
        Ok(Self {
            enabled,
            rate_bps,
            interval_seconds,
        })
    }
}

/// A validated purchase, priced against the phase active at `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseQuote {
    pub phase_index: usize,
    pub sale_units: u64,
    pub quote_cost: u64,
}

#[account]
#[derive(Default)]
pub struct SalePool {
    /// Unique pool identifier
    pub pool_id: [u8; 32],

    /// Administrator of the sale
    pub owner: Pubkey,

    /// The token being sold
    pub sale_mint: Pubkey,

    /// The stable token buyers pay with
    pub quote_mint: Pubkey,

    pub sale_decimals: u8,

    /// PDA that owns the sale vault and quote treasury
    pub pool_authority: Pubkey,

    /// Sale inventory token account
    pub sale_vault: Pubkey,

    /// Quote collection token account; pays rewards and owner withdrawals
    pub quote_treasury: Pubkey,

    pub phase_schedule: Pubkey,

    pub limits: PurchaseLimits,

    pub reward_config: RewardConfig,

    /// Running totals
    pub total_sale_sold: u64,
    pub total_quote_raised: u64,
    pub total_rewards_paid: u64,
    pub total_quote_withdrawn: u64,
    pub total_sale_recovered: u64,

    /// Bump seeds for PDA derivation
    pub bump: u8,
    pub authority_bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl SalePool {
    pub const LEN: usize = 8 + // discriminator
        32 + // pool_id
        32 + // owner
        32 + // sale_mint
        32 + // quote_mint
        1 + // sale_decimals
        32 + // pool_authority
        32 + // sale_vault
        32 + // quote_treasury
        32 + // phase_schedule
        PurchaseLimits::LEN + // limits
        RewardConfig::LEN + // reward_config
        8 * 5 + // totals
        1 + // bump
        1 + // authority_bump
        32; // _reserved

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_owner(caller), SalePoolError::Unauthorized);
        Ok(())
    }

    /// Owner withdrawals are bounded by what the quote treasury holds.
    pub fn check_withdrawal(&self, amount: u64, treasury_balance: u64) -> Result<()> {
        require!(amount > 0, SalePoolError::InvalidAmount);
        require!(
            amount <= treasury_balance,
            SalePoolError::InsufficientBalance
        );
        Ok(())
    }

    /// Signer seeds of the pool authority PDA.
    pub fn authority_seeds(&self) -> [&[u8]; 3] {
        [
            POOL_AUTHORITY_SEED,
            &self.pool_id,
            std::slice::from_ref(&self.authority_bump),
        ]
    }

    /// Run every purchase check that does not touch a token account:
    /// active phase, size limits, remaining allocation, then price.
    pub fn quote_purchase(
        &self,
        schedule: &PhaseSchedule,
        sale_units: u64,
        now: i64,
    ) -> Result<PurchaseQuote> {
        let (phase_index, phase) = schedule
            .active_phase(now)
            .ok_or(SalePoolError::NoActivePhase)?;

        self.limits.check(sale_units)?;
        require!(
            phase.remaining() >= sale_units,
            SalePoolError::AllocationExhausted
        );

        let quote_cost = math::quote_cost(sale_units, phase.price, self.sale_decimals)?;
        require!(quote_cost > 0, SalePoolError::InvalidAmount);

        Ok(PurchaseQuote {
            phase_index,
            sale_units,
            quote_cost,
        })
    }

    pub fn record_sale(&mut self, sale_units: u64, quote_cost: u64) -> Result<()> {
        self.total_sale_sold = self
            .total_sale_sold
            .checked_add(sale_units)
            .ok_or(SalePoolError::MathOverflow)?;
        self.total_quote_raised = self
            .total_quote_raised
            .checked_add(quote_cost)
            .ok_or(SalePoolError::MathOverflow)?;
        Ok(())
    }

    pub fn record_reward(&mut self, reward: u64) -> Result<()> {
        self.total_rewards_paid = self
            .total_rewards_paid
            .checked_add(reward)
            .ok_or(SalePoolError::MathOverflow)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.total_quote_withdrawn = self
            .total_quote_withdrawn
            .checked_add(amount)
            .ok_or(SalePoolError::MathOverflow)?;
        Ok(())
    }

    pub fn record_recovery(&mut self, amount: u64) -> Result<()> {
        self.total_sale_recovered = self
            .total_sale_recovered
            .checked_add(amount)
            .ok_or(SalePoolError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::SECONDS_PER_DAY, state::PhaseConfig};

    const TOKEN: u64 = 1_000_000_000;
    const USDT: u64 = 1_000_000;
    const NOW: i64 = 1_700_000_000;

    fn sale() -> (SalePool, PhaseSchedule) {
        let pool = SalePool {
            owner: Pubkey::new_unique(),
            sale_decimals: 9,
            limits: PurchaseLimits::new(100 * TOKEN, 10_000 * TOKEN).unwrap(),
            ..Default::default()
        };

        let mut schedule = PhaseSchedule {
            pool: Pubkey::new_unique(),
            phases: Vec::new(),
            bump: 255,
        };
        schedule
            .init_phases(&[
                PhaseConfig { price: USDT, allocation: 60_000_000 * TOKEN },
                PhaseConfig { price: 2 * USDT, allocation: 5_000 * TOKEN },
            ])
            .unwrap();
        schedule
            .set_timing(0, NOW + 2, NOW + 2 + 30 * SECONDS_PER_DAY, NOW)
            .unwrap();

        (pool, schedule)
    }

    #[test]
    fn test_quote_one_thousand_tokens_at_one_dollar() {
        let (pool, schedule) = sale();
        let quote = pool.quote_purchase(&schedule, 1_000 * TOKEN, NOW + 3).unwrap();
        assert_eq!(
            quote,
            PurchaseQuote {
                phase_index: 0,
                sale_units: 1_000 * TOKEN,
                quote_cost: 1_000 * USDT,
            }
        );
    }

    #[test]
    fn test_quote_outside_window() {
        let (pool, schedule) = sale();
        let result = pool.quote_purchase(&schedule, 1_000 * TOKEN, NOW);
        assert_eq!(result.unwrap_err(), SalePoolError::NoActivePhase.into());

        let result = pool.quote_purchase(&schedule, 1_000 * TOKEN, NOW + 31 * SECONDS_PER_DAY);
        assert_eq!(result.unwrap_err(), SalePoolError::NoActivePhase.into());
        assert_eq!(schedule.phase(0).unwrap().sold, 0);
    }

    #[test]
    fn test_quote_respects_limits() {
        let (pool, schedule) = sale();
        let result = pool.quote_purchase(&schedule, 50 * TOKEN, NOW + 3);
        assert_eq!(result.unwrap_err(), SalePoolError::BelowMinimumPurchase.into());

        let result = pool.quote_purchase(&schedule, 20_000 * TOKEN, NOW + 3);
        assert_eq!(result.unwrap_err(), SalePoolError::ExceedsMaximumPurchase.into());
    }

    #[test]
    fn test_quote_respects_allocation() {
        let (pool, mut schedule) = sale();
        let start = NOW + 2 + 30 * SECONDS_PER_DAY;
        schedule.set_timing(1, start, start + SECONDS_PER_DAY, NOW).unwrap();

        let quote = pool.quote_purchase(&schedule, 4_000 * TOKEN, start).unwrap();
        assert_eq!(quote.phase_index, 1);
        assert_eq!(quote.quote_cost, 8_000 * USDT);
        schedule.record_sale(quote.phase_index, quote.sale_units).unwrap();

        let result = pool.quote_purchase(&schedule, 1_001 * TOKEN, start + 1);
        assert_eq!(result.unwrap_err(), SalePoolError::AllocationExhausted.into());
        assert!(pool.quote_purchase(&schedule, 1_000 * TOKEN, start + 1).is_ok());
    }

    #[test]
    fn test_quote_rejects_zero_cost() {
        let (mut pool, schedule) = sale();
        pool.limits = PurchaseLimits::new(0, 10_000 * TOKEN).unwrap();
        let result = pool.quote_purchase(&schedule, 999, NOW + 3);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidAmount.into());
    }

    #[test]
    fn test_purchase_limits() {
        let limits = PurchaseLimits::new(100 * TOKEN, 10_000 * TOKEN).unwrap();

        let result = limits.check(50 * TOKEN);
        assert_eq!(result.unwrap_err(), SalePoolError::BelowMinimumPurchase.into());

        let result = limits.check(20_000 * TOKEN);
        assert_eq!(result.unwrap_err(), SalePoolError::ExceedsMaximumPurchase.into());

        assert!(limits.check(100 * TOKEN).is_ok());
        assert!(limits.check(10_000 * TOKEN).is_ok());
    }

    #[test]
    fn test_limits_require_min_below_max() {
        let result = PurchaseLimits::new(10, 9);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidPurchaseLimits.into());
        assert!(PurchaseLimits::new(10, 10).is_ok());
    }

    #[test]
    fn test_reward_config_validation() {
        let result = RewardConfig::new(true, MAX_BPS + 1, 86400);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidRewardRate.into());

        let result = RewardConfig::new(true, 500, 0);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidRewardInterval.into());

        let result = RewardConfig::new(true, 0, 86400);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidRewardRate.into());

        // A disabled config may carry any interval or a zero rate
        assert!(RewardConfig::new(false, 500, 0).is_ok());
        assert!(RewardConfig::new(false, 0, 0).is_ok());
        assert_eq!(
            RewardConfig::new(true, 500, 86400).unwrap(),
            RewardConfig {
                enabled: true,
                rate_bps: 500,
                interval_seconds: 86400,
            }
        );
    }

    #[test]
    fn test_owner_check_and_totals() {
        let owner = Pubkey::new_unique();
        let mut pool = SalePool {
            owner,
            ..Default::default()
        };
        assert!(pool.is_owner(&owner));
        assert!(!pool.is_owner(&Pubkey::new_unique()));
        assert!(pool.require_owner(&owner).is_ok());
        let result = pool.require_owner(&Pubkey::new_unique());
        assert_eq!(result.unwrap_err(), SalePoolError::Unauthorized.into());

        pool.record_sale(1_000 * TOKEN, 1_000_000_000).unwrap();
        pool.record_reward(50_000_000).unwrap();
        assert_eq!(pool.total_sale_sold, 1_000 * TOKEN);
        assert_eq!(pool.total_quote_raised, 1_000_000_000);
        assert_eq!(pool.total_rewards_paid, 50_000_000);

        pool.pool_id = [7u8; 32];
        pool.authority_bump = 251;
        let seeds = pool.authority_seeds();
        assert_eq!(seeds[0], POOL_AUTHORITY_SEED);
        assert_eq!(seeds[1], &[7u8; 32][..]);
        assert_eq!(seeds[2], &[251u8][..]);

        pool.total_quote_withdrawn = u64::MAX;
        let result = pool.record_withdrawal(1);
        assert_eq!(result.unwrap_err(), SalePoolError::MathOverflow.into());
    }

    #[test]
    fn test_withdrawal_bounded_by_treasury() {
        let (pool, _) = sale();
        let balance = 5_000 * USDT;

        let result = pool.check_withdrawal(balance + 1, balance);
        assert_eq!(result.unwrap_err(), SalePoolError::InsufficientBalance.into());

        assert!(pool.check_withdrawal(balance, balance).is_ok());
        assert!(pool.check_withdrawal(1, balance).is_ok());

        let result = pool.check_withdrawal(0, balance);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidAmount.into());

        let result = pool.check_withdrawal(1, 0);
        assert_eq!(result.unwrap_err(), SalePoolError::InsufficientBalance.into());
    }
}
