use crate::error::ErrorCode;
use crate::states::*;
use crate::{MAX_POOL_NAME_LEN, REWARD_VAULT_SEED, STAKE_VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Creates a new staking pool with its two custody vaults.
///
/// Callable by the vault admin or an active partner; the caller becomes
/// the pool's partner identity and keeps funding/re-rate/toggle rights.
/// Staking and reward mints may live under different token programs.
#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Allow-list marker for `creator`; absent when the admin creates a
    /// house pool. `partner_allowed` rejects markers naming someone else.
    pub partner_info: Option<Account<'info, PartnerInfo>>,

    /// CHECK: Authority PDA owning both custody vaults.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(mint::token_program = staking_token_program)]
    pub staking_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mint::token_program = reward_token_program)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The pool record, keyed by the next pool id.
    #[account(
        init,
        seeds = [
            POOL_SEED.as_bytes(),
            global_config.pool_count.to_le_bytes().as_ref()
        ],
        bump,
        payer = creator,
        space = StakingPool::LEN
    )]
    pub pool: Account<'info, StakingPool>,

    /// Program-owned custody for staked balance
    #[account(
        init,
        seeds = [
            STAKE_VAULT_SEED.as_bytes(),
            global_config.pool_count.to_le_bytes().as_ref()
        ],
        bump,
        payer = creator,
        token::mint = staking_mint,
        token::authority = authority,
        token::token_program = staking_token_program,
    )]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program-owned custody backing reward payouts
    #[account(
        init,
        seeds = [
            REWARD_VAULT_SEED.as_bytes(),
            global_config.pool_count.to_le_bytes().as_ref()
        ],
        bump,
        payer = creator,
        token::mint = reward_mint,
        token::authority = authority,
        token::token_program = reward_token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program of the staking mint
    pub staking_token_program: Interface<'info, TokenInterface>,

    /// Token program of the reward mint
    pub reward_token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn create_pool(
    ctx: Context<CreatePool>,
    reward_rate: u64,
    min_staking_period: u64,
    max_stake_per_user: u64,
    name: String,
) -> Result<()> {
    require!(
        partner_allowed(
            &ctx.accounts.creator.key(),
            &ctx.accounts.global_config.admin,
            ctx.accounts.partner_info.as_deref(),
        ),
        ErrorCode::Unauthorized
    );
    require!(reward_rate > 0, ErrorCode::InvalidAmount);
    require!(name.len() <= MAX_POOL_NAME_LEN, ErrorCode::NameTooLong);

    let global_config = &mut ctx.accounts.global_config;
    let pool_id = global_config.pool_count;
    global_config.pool_count = pool_id.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

    let block_timestamp = Clock::get()?.unix_timestamp as u64;

    let pool = &mut ctx.accounts.pool;
    pool.bump = ctx.bumps.pool;
    pool.id = pool_id;
    pool.partner = ctx.accounts.creator.key();
    pool.name = name;
    pool.staking_mint = ctx.accounts.staking_mint.key();
    pool.reward_mint = ctx.accounts.reward_mint.key();
    pool.stake_vault = ctx.accounts.stake_vault.key();
    pool.reward_vault = ctx.accounts.reward_vault.key();
    pool.total_staked = 0;
    pool.reward_rate = reward_rate;
    pool.reward_per_token_stored = 0;
    pool.last_update_time = block_timestamp;
    pool.min_staking_period = min_staking_period;
    pool.max_stake_per_user = max_stake_per_user;
    pool.active = true;
    pool.total_funded = 0;
    pool.total_rewards_paid = 0;
    pool.total_fees_paid = 0;

    emit!(PoolCreated {
        pool_id,
        partner: ctx.accounts.creator.key(),
        staking_mint: ctx.accounts.staking_mint.key(),
        reward_mint: ctx.accounts.reward_mint.key(),
        reward_rate,
        min_staking_period,
        max_stake_per_user,
    });

    Ok(())
}
