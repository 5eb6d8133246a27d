use anchor_lang::prelude::*;

#[error_code]
pub enum SalePoolError {
    #[msg("Unauthorized authority for this operation")]
    Unauthorized,

    #[msg("Phase index out of range")]
    InvalidPhaseIndex,

    #[msg("Phase count must be between 1 and MAX_PHASES")]
    InvalidPhaseCount,

    #[msg("Phase start must be before phase end")]
    InvalidPhaseWindow,

    #[msg("Overlaps with another phase")]
    PhaseOverlap,

    #[msg("Phase has already started")]
    PhaseAlreadyStarted,

    #[msg("Phase has not been scheduled")]
    PhaseNotScheduled,

    #[msg("Phase is still active")]
    PhaseActive,

    #[msg("Invalid phase price")]
    InvalidPrice,

    #[msg("Allocation cannot be below the amount already sold")]
    AllocationBelowSold,

    #[msg("No active phase")]
    NoActivePhase,

    #[msg("Below minimum purchase")]
    BelowMinimumPurchase,

    #[msg("Exceeds maximum purchase")]
    ExceedsMaximumPurchase,

    #[msg("Phase allocation exhausted")]
    AllocationExhausted,

    #[msg("Invalid purchase limits, min must be <= max")]
    InvalidPurchaseLimits,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Token transfer rejected by the ledger")]
    PaymentFailed,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Transfer destination is the source account")]
    InvalidDestination,

    #[msg("Rewards are disabled")]
    RewardsDisabled,

    #[msg("Reward interval not met")]
    RewardIntervalNotMet,

    #[msg("No reward accrued since last claim")]
    NoRewardAccrued,

    #[msg("Invalid reward rate, must be <= 10000")]
    InvalidRewardRate,

    #[msg("Reward interval must be positive when rewards are enabled")]
    InvalidRewardInterval,

    #[msg("Token account mint does not match the pool")]
    InvalidMint,

    #[msg("Invalid owner")]
    InvalidOwner,

    #[msg("Math overflow")]
    MathOverflow,
}
