use crate::error::ErrorCode;
use crate::states::*;
use crate::{
    CARBON_FEE_VAULT_SEED, CONVERSION_CUSTODY_SEED, MAX_CONVERSION_FEE_RATE,
    MAX_SEASONAL_ADJUSTMENT, MIN_SEASONAL_ADJUSTMENT,
};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Initializes global protocol configuration, the platform-wide stats
/// account, and the program-owned custody/fee vaults.
///
/// The waste and carbon mints are fixed, externally created mints whose
/// mint authority (and, for the waste mint, Token-2022 permanent
/// delegate) is the program `authority` PDA.
#[derive(Accounts)]
pub struct InitialiseConfigs<'info> {
    /// Bootstrap admin signer (must match program-level admin id)
    #[account(
        mut,
        constraint = owner.key() == crate::admin::id() @ ErrorCode::Unauthorized
    )]
    pub owner: Signer<'info>,

    /// Program authority PDA used as mint authority and custody owner.
    ///
    /// CHECK: PDA derivation is enforced by seeds; used only as a Pubkey
    /// and CPI signer.
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

    /// Platform aggregate stats account
    #[account(
        init,
        seeds = [PLATFORM_STATS_SEED.as_bytes()],
        bump,
        payer = owner,
        space = PlatformStats::LEN
    )]
    pub platform_stats: Account<'info, PlatformStats>,

    /// Waste token mint (fixed)
    #[account(
        constraint = waste_mint.key() == crate::waste_mint::id() @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub waste_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Carbon credit mint (fixed)
    #[account(
        constraint = carbon_mint.key() == crate::carbon_mint::id() @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub carbon_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Program-owned waste vault holding pending conversion custody
    #[account(
        init,
        seeds = [CONVERSION_CUSTODY_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = waste_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub conversion_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program-owned carbon vault receiving conversion fees
    #[account(
        init,
        seeds = [CARBON_FEE_VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = carbon_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub carbon_fee_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn initialise_configs(
    ctx: Context<InitialiseConfigs>,
    admin: Pubkey,
    fee_collector: Pubkey,
    conversion_fee_rate: u64,
    min_conversion_amount: u64,
    verification_threshold: u64,
    seasonal_adjustment: u64,
    submission_enabled: bool,
    conversion_enabled: bool,
) -> Result<()> {
    require_keys_neq!(admin, Pubkey::default());
    require_keys_neq!(fee_collector, Pubkey::default());
    require!(
        conversion_fee_rate <= MAX_CONVERSION_FEE_RATE,
        ErrorCode::ValueOutOfRange
    );
    require!(
        (MIN_SEASONAL_ADJUSTMENT..=MAX_SEASONAL_ADJUSTMENT).contains(&seasonal_adjustment),
        ErrorCode::ValueOutOfRange
    );

    let global_config = ctx.accounts.global_config.deref_mut();
    global_config.bump = ctx.bumps.global_config;
    global_config.admin = admin;
    global_config.fee_collector = fee_collector;
    global_config.price_oracle = Pubkey::default();
    global_config.waste_mint = ctx.accounts.waste_mint.key();
    global_config.carbon_mint = ctx.accounts.carbon_mint.key();
    global_config.conversion_custody = ctx.accounts.conversion_custody.key();
    global_config.carbon_fee_vault = ctx.accounts.carbon_fee_vault.key();
    global_config.conversion_fee_rate = conversion_fee_rate;
    global_config.min_conversion_amount = min_conversion_amount;
    global_config.verification_threshold = verification_threshold;
    global_config.seasonal_adjustment = seasonal_adjustment;
    global_config.submission_enabled = submission_enabled;
    global_config.conversion_enabled = conversion_enabled;
    global_config.submission_count = 0;
    global_config.conversion_count = 0;
    global_config.waste_multiplier = DEFAULT_WASTE_MULTIPLIER;
    global_config.quality_multiplier = DEFAULT_QUALITY_MULTIPLIER;
    global_config.carbon_factor = DEFAULT_CARBON_FACTOR;

    let platform_stats = ctx.accounts.platform_stats.deref_mut();
    platform_stats.bump = ctx.bumps.platform_stats;

    msg!("Global Config initialized");

    emit!(ConfigInitialized {
        admin,
        fee_collector,
        waste_mint: ctx.accounts.waste_mint.key(),
        carbon_mint: ctx.accounts.carbon_mint.key(),
        conversion_fee_rate,
        min_conversion_amount,
        verification_threshold,
        seasonal_adjustment,
    });

    Ok(())
}
