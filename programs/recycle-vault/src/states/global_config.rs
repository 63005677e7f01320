use anchor_lang::prelude::*;

pub const GLOBAL_CONFIG_SEED: &str = "global_config";

/// Vault-wide configuration: admin identity, claim fee routing, the
/// emergency pause switch, and the monotonically increasing pool id
/// counter.
#[account]
#[derive(Default, Debug)]
pub struct GlobalConfig {
    pub bump: u8,

    /// Current admin of the vault (authorized to update config, pause,
    /// and recover custodied balances).
    pub admin: Pubkey,

    /// Wallet whose token accounts receive the claim fee split.
    pub fee_collector: Pubkey,

    /// Claim fee in basis points (ceiling 10%).
    pub claim_fee_rate: u64,

    /// Emergency switch: blocks stake/unstake entry points on every pool.
    pub paused: bool,

    /// Next pool id.
    pub pool_count: u64,
}

impl GlobalConfig {
    pub const LEN: usize = 8 + 1 + 32 * 2 + 8 + 1 + 8;

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        *key == self.admin || *key == crate::admin::id()
    }
}
