use crate::error::ErrorCode;
use crate::states::*;
use crate::MAX_CLAIM_FEE_RATE;
use anchor_lang::prelude::*;
use std::ops::DerefMut;

/// Initializes the vault-wide configuration. Pools are created separately
/// per partner via `create_pool`.
#[derive(Accounts)]
pub struct InitialiseConfigs<'info> {
    /// Bootstrap admin signer (must match program-level admin id)
    #[account(
        mut,
        constraint = owner.key() == crate::admin::id() @ ErrorCode::Unauthorized
    )]
    pub owner: Signer<'info>,

    /// Program authority PDA owning every pool custody vault.
    ///
    /// CHECK: PDA derivation is enforced by seeds; used only as a Pubkey.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Global config account
    #[account(
        init,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = GlobalConfig::LEN
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn initialise_configs(
    ctx: Context<InitialiseConfigs>,
    admin: Pubkey,
    fee_collector: Pubkey,
    claim_fee_rate: u64,
) -> Result<()> {
    require_keys_neq!(admin, Pubkey::default());
    require_keys_neq!(fee_collector, Pubkey::default());
    require!(
        claim_fee_rate <= MAX_CLAIM_FEE_RATE,
        ErrorCode::ValueOutOfRange
    );

    let global_config = ctx.accounts.global_config.deref_mut();
    global_config.bump = ctx.bumps.global_config;
    global_config.admin = admin;
    global_config.fee_collector = fee_collector;
    global_config.claim_fee_rate = claim_fee_rate;
    global_config.paused = false;
    global_config.pool_count = 0;

    msg!("Global Config initialized");

    emit!(ConfigInitialized {
        admin,
        fee_collector,
        claim_fee_rate,
    });

    Ok(())
}
