pub mod events;
pub mod global_config;
pub mod partner_info;
pub mod pool;
pub mod user_stake_info;

pub use events::*;
pub use global_config::*;
pub use partner_info::*;
pub use pool::*;
pub use user_stake_info::*;
