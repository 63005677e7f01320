use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::burn_from_user;
use crate::MAX_LOCATION_TAG_LEN;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Permanently retires carbon credits for an offset claim.
///
/// The burn is signed by the holder and cannot be reversed; the stated
/// reason travels with the event for off-chain registries.
#[derive(Accounts)]
pub struct Retire<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [PLATFORM_STATS_SEED.as_bytes()],
        bump = platform_stats.bump,
    )]
    pub platform_stats: Account<'info, PlatformStats>,

    #[account(
        init_if_needed,
        seeds = [
            USER_STATS_SEED.as_bytes(),
            user.key().as_ref()
        ],
        bump,
        payer = user,
        space = UserStats::LEN
    )]
    pub user_stats: Account<'info, UserStats>,

    #[account(
        mut,
        address = global_config.carbon_mint @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub carbon_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = carbon_mint,
        token::authority = user,
        token::token_program = token_program,
    )]
    pub user_carbon_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn retire(ctx: Context<Retire>, amount: u64, reason: String) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(!reason.is_empty(), ErrorCode::InvalidInput);
    require!(reason.len() <= MAX_LOCATION_TAG_LEN, ErrorCode::NameTooLong);
    require!(
        ctx.accounts.user_carbon_token.amount >= amount,
        ErrorCode::InsufficientBalance
    );

    let user_stats = &mut ctx.accounts.user_stats;
    if user_stats.user == Pubkey::default() {
        user_stats.bump = ctx.bumps.user_stats;
        user_stats.user = ctx.accounts.user.key();
    }
    user_stats
        .record_retirement(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    ctx.accounts
        .platform_stats
        .record_retirement(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    burn_from_user(
        ctx.accounts.user.to_account_info(),
        ctx.accounts.carbon_mint.to_account_info(),
        ctx.accounts.user_carbon_token.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
    )?;
    ctx.accounts.user_carbon_token.reload()?;

    emit!(TokensBurned {
        mint: ctx.accounts.carbon_mint.key(),
        account: ctx.accounts.user_carbon_token.key(),
        amount,
        new_balance: ctx.accounts.user_carbon_token.amount,
    });

    emit!(CreditsRetired {
        user: ctx.accounts.user.key(),
        amount,
        reason,
    });

    Ok(())
}
