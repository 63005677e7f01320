use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track protocol state changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the vault configuration is initialized.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub fee_collector: Pubkey,
    pub claim_fee_rate: u64,
}

/// Emitted whenever configuration parameters are modified.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub param: u8,
    pub value: u64,
}

/// Emitted when a partner is granted or revoked.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PartnerSet {
    pub partner: Pubkey,
    pub active: bool,
}

/// Emitted when a new staking pool is created.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PoolCreated {
    pub pool_id: u64,
    pub partner: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_rate: u64,
    pub min_staking_period: u64,
    pub max_stake_per_user: u64,
}

/// Emitted when a user adds to their position.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Staked {
    pub pool_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub user_total: u64,
    pub pool_total: u64,
}

/// Emitted when a user withdraws stake (any auto-claimed rewards appear
/// in a paired `RewardsClaimed`).
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Unstaked {
    pub pool_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub user_total: u64,
    pub pool_total: u64,
}

/// Emitted whenever pending rewards are paid out, whether via
/// `claim_rewards` or the unstake auto-claim.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardsClaimed {
    pub pool_id: u64,
    pub user: Pubkey,
    pub gross_amount: u64,
    pub fee_amount: u64,
    pub net_amount: u64,
}

/// Emitted when a partner deposits reward-token backing.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PoolFunded {
    pub pool_id: u64,
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

/// Emitted when the streaming rate changes (past accrual is checkpointed
/// at the old rate first).
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardRateUpdated {
    pub pool_id: u64,
    pub old_rate: u64,
    pub new_rate: u64,
}

/// Emitted when a pool is toggled between Active and Inactive.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PoolStatusToggled {
    pub pool_id: u64,
    pub active: bool,
}

/// Emitted when the vault-wide pause switch changes.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PauseSet {
    pub admin: Pubkey,
    pub paused: bool,
}

/// Emitted when the admin recovers custodied balance while paused.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct EmergencyWithdrawn {
    pub pool_id: u64,
    pub vault: Pubkey,
    pub amount: u64,
}
