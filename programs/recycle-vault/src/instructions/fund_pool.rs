use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_user_to_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Deposits reward-token backing into a pool's reward vault.
///
/// Only the pool's partner or the admin may fund. Beyond the raw balance
/// transfer there is no accounting: reward capacity is caller-managed,
/// and claims fail with `InsufficientRewardFunds` when it runs dry.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct FundPool<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

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
        address = pool.reward_mint @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = pool.reward_vault @ ErrorCode::InvalidVault,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn fund_pool(ctx: Context<FundPool>, pool_id: u64, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    let funder = ctx.accounts.funder.key();
    require!(
        funder == ctx.accounts.pool.partner || ctx.accounts.global_config.is_admin(&funder),
        ErrorCode::Unauthorized
    );

    let pool = &mut ctx.accounts.pool;
    pool.total_funded = pool
        .total_funded
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    transfer_from_user_to_vault(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_reward_token.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.reward_mint.decimals,
    )?;
    ctx.accounts.reward_vault.reload()?;

    emit!(PoolFunded {
        pool_id,
        funder,
        amount,
        vault_balance: ctx.accounts.reward_vault.amount,
    });

    Ok(())
}
