use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{mul_div_floor, transfer_from_vault_to_user};
use crate::FEE_RATE_DENOMINATOR_VALUE;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Pays out everything pending on a position, split between the user and
/// the fee collector.
///
/// Claims stay available while the vault is paused: pausing blocks the
/// stake/unstake entry points only.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct ClaimRewards<'info> {
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

    /// CHECK: Authority PDA owning the reward custody vault.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        address = pool.reward_mint @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = user,
        token::token_program = token_program,
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
        token::token_program = token_program,
        constraint = fee_reward_token.owner == global_config.fee_collector @ ErrorCode::InvalidVault,
    )]
    pub fee_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn claim_rewards(ctx: Context<ClaimRewards>, pool_id: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let user_stake_info = &mut ctx.accounts.user_stake_info;

    let block_timestamp = Clock::get()?.unix_timestamp as u64;
    pool.checkpoint(block_timestamp)
        .ok_or(ErrorCode::MathOverflow)?;
    user_stake_info.settle(pool).ok_or(ErrorCode::MathOverflow)?;

    let gross_rewards = user_stake_info.pending_rewards;
    require!(gross_rewards > 0, ErrorCode::NoRewardsToClaim);
    require!(
        ctx.accounts.reward_vault.amount >= gross_rewards,
        ErrorCode::InsufficientRewardFunds
    );

    let fee_rewards = mul_div_floor(
        gross_rewards,
        ctx.accounts.global_config.claim_fee_rate,
        FEE_RATE_DENOMINATOR_VALUE,
    )
    .ok_or(ErrorCode::MathOverflow)?;
    let net_rewards = gross_rewards
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

    let signer_seeds: &[&[&[u8]]] = &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]];

    if net_rewards > 0 {
        transfer_from_vault_to_user(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.reward_vault.to_account_info(),
            ctx.accounts.user_reward_token.to_account_info(),
            ctx.accounts.reward_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
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
            ctx.accounts.token_program.to_account_info(),
            fee_rewards,
            ctx.accounts.reward_mint.decimals,
            signer_seeds,
        )?;
    }

    emit!(RewardsClaimed {
        pool_id,
        user: ctx.accounts.user.key(),
        gross_amount: gross_rewards,
        fee_amount: fee_rewards,
        net_amount: net_rewards,
    });

    Ok(())
}
