use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool_id: [u8; 32],
    pub owner: Pubkey,
    pub sale_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub phase_count: u8,
    pub min_purchase: u64,
    pub max_purchase: u64,
    pub timestamp: i64,
}

#[event]
pub struct InventoryFunded {
    pub pool_id: [u8; 32],
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance_after: u64,
    pub timestamp: i64,
}

#[event]
pub struct PhaseTimingUpdated {
    pub pool_id: [u8; 32],
    pub phase_index: u8,
    pub start_time: i64,
    pub end_time: i64,
    pub timestamp: i64,
}

#[event]
pub struct PhaseConfigured {
    pub pool_id: [u8; 32],
    pub phase_index: u8,
    pub price: u64,
    pub allocation: u64,
    pub timestamp: i64,
}

#[event]
pub struct PurchaseLimitsUpdated {
    pub pool_id: [u8; 32],
    pub min_amount: u64,
    pub max_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardParametersUpdated {
    pub pool_id: [u8; 32],
    pub enabled: bool,
    pub rate_bps: u16,
    pub interval_seconds: i64,
    pub timestamp: i64,
}

#[event]
pub struct TokensPurchased {
    pub pool_id: [u8; 32],
    pub buyer: Pubkey,
    pub phase_index: u8,
    pub sale_units: u64,
    pub quote_cost: u64,
    pub phase_sold_after: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardClaimed {
    pub pool_id: [u8; 32],
    pub buyer: Pubkey,
    pub reward: u64,
    pub accrued_quote_spend: u64,
    pub rate_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct QuoteWithdrawn {
    pub pool_id: [u8; 32],
    pub recipient: Pubkey,
    pub amount: u64,
    pub treasury_balance_after: u64,
    pub timestamp: i64,
}

#[event]
pub struct UnsoldRecovered {
    pub pool_id: [u8; 32],
    pub phase_index: u8,
    pub amount: u64,
    pub already_recovered: bool,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub pool_id: [u8; 32],
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
