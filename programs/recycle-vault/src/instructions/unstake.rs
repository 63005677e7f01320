use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{mul_div_floor, transfer_from_vault_to_user};
use crate::FEE_RATE_DENOMINATOR_VALUE;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Withdraws stake after the lock expires, auto-claiming any pending
/// rewards (fee-split) in the same call.
///
/// A partial unstake leaves the rest of the position accruing; a full
/// unstake leaves the zeroed record behind as historical residue.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Unstake<'info> {
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
        mut,
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            pool_id.to_le_bytes().as_ref(),
            user.key().as_ref()
        ],
        bump = user_stake_info.bump,
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,

    /// CHECK: Authority PDA owning both custody vaults.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        address = pool.staking_mint @ ErrorCode::InvalidMint,
        mint::token_program = staking_token_program,
    )]
    pub staking_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        address = pool.reward_mint @ ErrorCode::InvalidMint,
        mint::token_program = reward_token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = staking_mint,
        token::authority = user,
        token::token_program = staking_token_program,
    )]
    pub user_stake_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = pool.stake_vault @ ErrorCode::InvalidVault,
    )]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = user,
        token::token_program = reward_token_program,
    )]
    pub user_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = pool.reward_vault @ ErrorCode::InvalidVault,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Fee collector's reward token account.
    #[account(
        mut,
        token::mint = reward_mint,
        token::token_program = reward_token_program,
        constraint = fee_reward_token.owner == global_config.fee_collector @ ErrorCode::InvalidVault,
    )]
    pub fee_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program of the staking mint
    pub staking_token_program: Interface<'info, TokenInterface>,

    /// Token program of the reward mint
    pub reward_token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn unstake(ctx: Context<Unstake>, pool_id: u64, amount: u64) -> Result<()> {
    require!(
        !ctx.accounts.global_config.paused,
        ErrorCode::SystemPaused
    );
    require!(amount > 0, ErrorCode::InvalidAmount);

    let pool = &mut ctx.accounts.pool;
    let user_stake_info = &mut ctx.accounts.user_stake_info;
    require!(
        user_stake_info.amount >= amount,
        ErrorCode::InsufficientStake
    );

    let block_timestamp = Clock::get()?.unix_timestamp as u64;
    require!(
        user_stake_info.lock_expired(pool.min_staking_period, block_timestamp),
        ErrorCode::LockNotExpired
    );

    pool.checkpoint(block_timestamp)
        .ok_or(ErrorCode::MathOverflow)?;
    user_stake_info.settle(pool).ok_or(ErrorCode::MathOverflow)?;

    // Auto-claim everything pending as part of the withdrawal.
    let gross_rewards = user_stake_info.pending_rewards;
    let mut net_rewards = 0u64;
    let mut fee_rewards = 0u64;
    if gross_rewards > 0 {
        require!(
            ctx.accounts.reward_vault.amount >= gross_rewards,
            ErrorCode::InsufficientRewardFunds
        );
        fee_rewards = mul_div_floor(
            gross_rewards,
            ctx.accounts.global_config.claim_fee_rate,
            FEE_RATE_DENOMINATOR_VALUE,
        )
        .ok_or(ErrorCode::MathOverflow)?;
        net_rewards = gross_rewards
            .checked_sub(fee_rewards)
            .ok_or(ErrorCode::MathOverflow)?;

        user_stake_info.pending_rewards = 0;
        user_stake_info.last_claim_timestamp = block_timestamp;
        user_stake_info.total_claimed = user_stake_info
            .total_claimed
            .checked_add(net_rewards)
            .ok_or(ErrorCode::MathOverflow)?;
        pool.total_rewards_paid = pool
            .total_rewards_paid
            .checked_add(net_rewards)
            .ok_or(ErrorCode::MathOverflow)?;
        pool.total_fees_paid = pool
            .total_fees_paid
            .checked_add(fee_rewards)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    user_stake_info.amount = user_stake_info
        .amount
        .checked_sub(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    let signer_seeds: &[&[&[u8]]] = &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]];

    transfer_from_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.user_stake_token.to_account_info(),
        ctx.accounts.staking_mint.to_account_info(),
        ctx.accounts.staking_token_program.to_account_info(),
        amount,
        ctx.accounts.staking_mint.decimals,
        signer_seeds,
    )?;

    if net_rewards > 0 {
        transfer_from_vault_to_user(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.reward_vault.to_account_info(),
            ctx.accounts.user_reward_token.to_account_info(),
            ctx.accounts.reward_mint.to_account_info(),
            ctx.accounts.reward_token_program.to_account_info(),
            net_rewards,
            ctx.accounts.reward_mint.decimals,
            signer_seeds,
        )?;
    }
    if fee_rewards > 0 {
        transfer_from_vault_to_user(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.reward_vault.to_account_info(),
            ctx.accounts.fee_reward_token.to_account_info(),
            ctx.accounts.reward_mint.to_account_info(),
            ctx.accounts.reward_token_program.to_account_info(),
            fee_rewards,
            ctx.accounts.reward_mint.decimals,
            signer_seeds,
        )?;
    }

    if gross_rewards > 0 {
        emit!(RewardsClaimed {
            pool_id,
            user: ctx.accounts.user.key(),
            gross_amount: gross_rewards,
            fee_amount: fee_rewards,
            net_amount: net_rewards,
        });
    }

    emit!(Unstaked {
        pool_id,
        user: ctx.accounts.user.key(),
        amount,
        user_total: ctx.accounts.user_stake_info.amount,
        pool_total: ctx.accounts.pool.total_staked,
    });

    Ok(())
}
