use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_user_to_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Adds to a staking position.
///
/// The pool and the position are checkpointed before the amount changes
/// so prior accrual settles at the old stake. Re-staking resets the lock
/// timestamp for the whole position.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Stake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [
            POOL_SEED.as_bytes(),
            pool_id.to_le_bytes().as_ref()
        ],
        bump = pool.bump,
    )]
    pub pool: Account<'info, StakingPool>,

    #[account(
        init_if_needed,
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            pool_id.to_le_bytes().as_ref(),
            user.key().as_ref()
        ],
        bump,
        payer = user,
        space = UserStakeInfo::LEN
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,

    #[account(
        address = pool.staking_mint @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub staking_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = staking_mint,
        token::authority = user,
        token::token_program = token_program,
    )]
    pub user_stake_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = pool.stake_vault @ ErrorCode::InvalidVault,
    )]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn stake(ctx: Context<Stake>, pool_id: u64, amount: u64) -> Result<()> {
    require!(
        !ctx.accounts.global_config.paused,
        ErrorCode::SystemPaused
    );
    let pool = &mut ctx.accounts.pool;
    require!(pool.active, ErrorCode::PoolInactive);
    require!(amount > 0, ErrorCode::InvalidAmount);

    let user_stake_info = &mut ctx.accounts.user_stake_info;
    if pool.max_stake_per_user > 0 {
        let projected = user_stake_info
            .amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        require!(
            projected <= pool.max_stake_per_user,
            ErrorCode::ExceedsMaxStake
        );
    }

    let block_timestamp = Clock::get()?.unix_timestamp as u64;
    pool.checkpoint(block_timestamp)
        .ok_or(ErrorCode::MathOverflow)?;

    if user_stake_info.owner == Pubkey::default() {
        user_stake_info.bump = ctx.bumps.user_stake_info;
        user_stake_info.pool_id = pool_id;
        user_stake_info.owner = ctx.accounts.user.key();
        user_stake_info.reward_per_token_paid = pool.reward_per_token_stored;
    }
    user_stake_info.settle(pool).ok_or(ErrorCode::MathOverflow)?;

    user_stake_info.amount = user_stake_info
        .amount
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    // The whole position re-locks from now.
    user_stake_info.stake_timestamp = block_timestamp;

    transfer_from_user_to_vault(
        ctx.accounts.user.to_account_info(),
        ctx.accounts.user_stake_token.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.staking_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.staking_mint.decimals,
    )?;

    emit!(Staked {
        pool_id,
        user: ctx.accounts.user.key(),
        amount,
        user_total: ctx.accounts.user_stake_info.amount,
        pool_total: ctx.accounts.pool.total_staked,
    });

    Ok(())
}
