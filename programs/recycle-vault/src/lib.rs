use anchor_lang::prelude::*;

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Recycle Vault",
    project_url: "https://circularitynexus.io",
    contacts: "email:security@circularitynexus.io",
    policy: "https://circularitynexus.io/security"
}

declare_id!("Dvf1qPzzvW1BkSUogRMaAvxZpXrmeTqYutTCBKpzHB1A");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("B8VmoTgg2arRfw7qQVTYK9GohYeyMEjaCSW6jVPVBUgV");
}

pub const AUTH_SEED: &str = "pool_and_reward_auth";
pub const STAKE_VAULT_SEED: &str = "stake_vault";
pub const REWARD_VAULT_SEED: &str = "reward_vault";

/// Scale of the per-pool reward-per-token accumulator.
pub const PRECISION: u128 = 1_000_000_000;

/// Common denominator for basis-point rates (10_000 = 100%).
pub const FEE_RATE_DENOMINATOR_VALUE: u64 = 10_000;

/// Ceiling for the claim fee (basis points, 10%).
pub const MAX_CLAIM_FEE_RATE: u64 = 1_000;

pub const MAX_POOL_NAME_LEN: usize = 32;

pub mod error;
pub mod instructions;
pub mod math;
pub mod states;
pub mod utils;

use instructions::*;

#[program]
pub mod recycle_vault {

    use super::*;

    pub fn initialise_configs(
        ctx: Context<InitialiseConfigs>,
        admin: Pubkey,
        fee_collector: Pubkey,
        claim_fee_rate: u64,
    ) -> Result<()> {
        instructions::initialise_configs(ctx, admin, fee_collector, claim_fee_rate)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
        instructions::update_config(ctx, param, value)
    }

    pub fn set_partner(ctx: Context<SetPartner>, active: bool, name: String) -> Result<()> {
        instructions::set_partner(ctx, active, name)
    }

    pub fn create_pool(
        ctx: Context<CreatePool>,
        reward_rate: u64,
        min_staking_period: u64,
        max_stake_per_user: u64,
        name: String,
    ) -> Result<()> {
        instructions::create_pool(ctx, reward_rate, min_staking_period, max_stake_per_user, name)
    }

    pub fn stake(ctx: Context<Stake>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::stake(ctx, pool_id, amount)
    }

    pub fn unstake(ctx: Context<Unstake>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::unstake(ctx, pool_id, amount)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>, pool_id: u64) -> Result<()> {
        instructions::claim_rewards(ctx, pool_id)
    }

    pub fn fund_pool(ctx: Context<FundPool>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::fund_pool(ctx, pool_id, amount)
    }

    pub fn update_reward_rate(
        ctx: Context<UpdateRewardRate>,
        pool_id: u64,
        new_rate: u64,
    ) -> Result<()> {
        instructions::update_reward_rate(ctx, pool_id, new_rate)
    }

    pub fn toggle_pool_status(ctx: Context<TogglePoolStatus>, pool_id: u64) -> Result<()> {
        instructions::toggle_pool_status(ctx, pool_id)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        instructions::set_pause(ctx, paused)
    }

    pub fn emergency_withdraw(
        ctx: Context<EmergencyWithdraw>,
        pool_id: u64,
        param: u8,
        value: u64,
    ) -> Result<()> {
        instructions::emergency_withdraw(ctx, pool_id, param, value)
    }
}
