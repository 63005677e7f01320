pub mod claim_rewards;
pub mod create_pool;
pub mod emergency_withdraw;
pub mod fund_pool;
pub mod initialise_configs;
pub mod set_partner;
pub mod set_pause;
pub mod stake;
pub mod toggle_pool_status;
pub mod unstake;
pub mod update_configs;
pub mod update_reward_rate;

pub use claim_rewards::*;
pub use create_pool::*;
pub use emergency_withdraw::*;
pub use fund_pool::*;
pub use initialise_configs::*;
pub use set_partner::*;
pub use set_pause::*;
pub use stake::*;
pub use toggle_pool_status::*;
pub use unstake::*;
pub use update_configs::*;
pub use update_reward_rate::*;
