use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_vault_to_user;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Emergency recovery of custodied balance, admin-only and only while the
/// vault is paused.
///
/// Selected by `param`:
/// - `0` → move staked balance from the pool's stake vault to the admin.
/// - `1` → move reward backing from the pool's reward vault to the admin.
///
/// `value` is the amount in base units (`0` = the whole vault balance).
/// This bypasses the normal accounting entirely; it exists as a
/// last-resort path when pool state is beyond repair.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct EmergencyWithdraw<'info> {
    /// Admin (must match `global_config.admin` or program admin).
    #[account(
        mut,
        constraint = global_config.is_admin(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// CHECK: Authority PDA; used only as signer for the vault CPIs.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [
            POOL_SEED.as_bytes(),
            pool_id.to_le_bytes().as_ref()
        ],
        bump = pool.bump,
    )]
    pub pool: Account<'info, StakingPool>,

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
        address = pool.stake_vault @ ErrorCode::InvalidVault,
    )]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = pool.reward_vault @ ErrorCode::InvalidVault,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Admin's staking token account (receiver for param `0`).
    #[account(
        mut,
        token::mint = staking_mint,
        token::authority = owner,
        token::token_program = staking_token_program,
    )]
    pub owner_stake_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Admin's reward token account (receiver for param `1`).
    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = owner,
        token::token_program = reward_token_program,
    )]
    pub owner_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program of the staking mint
    pub staking_token_program: Interface<'info, TokenInterface>,

    /// Token program of the reward mint
    pub reward_token_program: Interface<'info, TokenInterface>,
}

pub fn emergency_withdraw(
    ctx: Context<EmergencyWithdraw>,
    pool_id: u64,
    param: u8,
    value: u64,
) -> Result<()> {
    require!(ctx.accounts.global_config.paused, ErrorCode::SystemNotPaused);

    let signer_seeds: &[&[&[u8]]] = &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]];
    let (vault_key, amount) = match param {
        0 => {
            let amount = if value == 0 {
                ctx.accounts.stake_vault.amount
            } else {
                value
            };
            transfer_from_vault_to_user(
                ctx.accounts.authority.to_account_info(),
                ctx.accounts.stake_vault.to_account_info(),
                ctx.accounts.owner_stake_token.to_account_info(),
                ctx.accounts.staking_mint.to_account_info(),
                ctx.accounts.staking_token_program.to_account_info(),
                amount,
                ctx.accounts.staking_mint.decimals,
                signer_seeds,
            )?;
            (ctx.accounts.stake_vault.key(), amount)
        }
        1 => {
            let amount = if value == 0 {
                ctx.accounts.reward_vault.amount
            } else {
                value
            };
            transfer_from_vault_to_user(
                ctx.accounts.authority.to_account_info(),
                ctx.accounts.reward_vault.to_account_info(),
                ctx.accounts.owner_reward_token.to_account_info(),
                ctx.accounts.reward_mint.to_account_info(),
                ctx.accounts.reward_token_program.to_account_info(),
                amount,
                ctx.accounts.reward_mint.decimals,
                signer_seeds,
            )?;
            (ctx.accounts.reward_vault.key(), amount)
        }
        _ => return Err(ErrorCode::InvalidParam.into()),
    };

    emit!(EmergencyWithdrawn {
        pool_id,
        vault: vault_key,
        amount,
    });

    Ok(())
}
