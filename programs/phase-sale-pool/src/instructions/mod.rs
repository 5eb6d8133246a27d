pub mod initialize_pool;
pub mod fund_inventory;
pub mod set_phase_timing;
pub mod configure_phase;
pub mod set_purchase_limits;
pub mod set_reward_parameters;
pub mod purchase;
pub mod claim_reward;
pub mod withdraw_quote;
pub mod recover_unsold;
pub mod transfer_ownership;

pub use initialize_pool::*;
pub use fund_inventory::*;
pub use set_phase_timing::*;
pub use configure_phase::*;
pub use set_purchase_limits::*;
pub use set_reward_parameters::*;
pub use purchase::*;
pub use claim_reward::*;
pub use withdraw_quote::*;
pub use recover_unsold::*;
pub use transfer_ownership::*;
