/// PDA seeds
pub const POOL_SEED: &[u8] = b"pool";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const PHASE_SCHEDULE_SEED: &[u8] = b"phase_schedule";
pub const BUYER_SEED: &[u8] = b"buyer";

/// Time constants
pub const SECONDS_PER_DAY: i64 = 86400;

/// Schedule capacity
pub const MAX_PHASES: usize = 8;

/// Reward constants
pub const MAX_BPS: u16 = 10000;
