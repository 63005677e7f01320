use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{burn_with_authority, mint_to_account, transfer_from_vault_to_user};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Settles a conversion held above the verification threshold.
///
/// Approval burns the custodied waste and mints the fee-split credits;
/// rejection refunds the custodied waste to the user and reverses the
/// conversion aggregates. Auto-verified records cannot be re-settled.
#[derive(Accounts)]
#[instruction(conversion_id: u64)]
pub struct VerifyConversion<'info> {
    #[account(mut)]
    pub verifier: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Allow-list marker for `verifier`; absent when the admin settles
    /// directly. `verifier_allowed` rejects markers naming someone else.
    pub verifier_info: Option<Account<'info, VerifierInfo>>,

    #[account(
        mut,
        seeds = [
            CONVERSION_RECORD_SEED.as_bytes(),
            conversion_id.to_le_bytes().as_ref()
        ],
        bump = conversion_record.bump,
    )]
    pub conversion_record: Account<'info, ConversionRecord>,

    #[account(
        mut,
        seeds = [PLATFORM_STATS_SEED.as_bytes()],
        bump = platform_stats.bump,
    )]
    pub platform_stats: Account<'info, PlatformStats>,

    #[account(
        mut,
        seeds = [
            USER_STATS_SEED.as_bytes(),
            conversion_record.user.as_ref()
        ],
        bump = user_stats.bump,
    )]
    pub user_stats: Account<'info, UserStats>,

    /// CHECK: Authority PDA (custody owner, carbon mint authority)
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = global_config.waste_mint @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub waste_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = global_config.carbon_mint @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub carbon_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = global_config.conversion_custody @ ErrorCode::InvalidVault,
    )]
    pub conversion_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = waste_mint,
        token::authority = conversion_record.user,
        token::token_program = token_program,
    )]
    pub user_waste_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = carbon_mint,
        token::authority = conversion_record.user,
        token::token_program = token_program,
    )]
    pub user_carbon_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = global_config.carbon_fee_vault @ ErrorCode::InvalidVault,
    )]
    pub carbon_fee_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn verify_conversion(
    ctx: Context<VerifyConversion>,
    conversion_id: u64,
    approved: bool,
) -> Result<()> {
    require!(
        verifier_allowed(
            &ctx.accounts.verifier.key(),
            &ctx.accounts.global_config.admin,
            ctx.accounts.verifier_info.as_deref(),
        ),
        ErrorCode::Unauthorized
    );

    let record = &mut ctx.accounts.conversion_record;
    record.settle(approved, ctx.accounts.verifier.key())?;
    let waste_amount = record.waste_amount;
    let net_credits = record.net_credits();
    let fee_credits = record.fee_credits;

    let signer_seeds: &[&[&[u8]]] = &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]];

    if approved {
        ctx.accounts
            .user_stats
            .record_credits(net_credits)
            .ok_or(ErrorCode::MathOverflow)?;
        ctx.accounts
            .platform_stats
            .record_credits(net_credits, fee_credits)
            .ok_or(ErrorCode::MathOverflow)?;

        burn_with_authority(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.waste_mint.to_account_info(),
            ctx.accounts.conversion_custody.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            waste_amount,
            signer_seeds,
        )?;
        if net_credits > 0 {
            mint_to_account(
                ctx.accounts.authority.to_account_info(),
                ctx.accounts.carbon_mint.to_account_info(),
                ctx.accounts.user_carbon_token.to_account_info(),
                ctx.accounts.token_program.to_account_info(),
                net_credits,
                signer_seeds,
            )?;
        }
        if fee_credits > 0 {
            mint_to_account(
                ctx.accounts.authority.to_account_info(),
                ctx.accounts.carbon_mint.to_account_info(),
                ctx.accounts.carbon_fee_vault.to_account_info(),
                ctx.accounts.token_program.to_account_info(),
                fee_credits,
                signer_seeds,
            )?;
        }

        ctx.accounts.user_carbon_token.reload()?;
        emit!(TokensMinted {
            mint: ctx.accounts.carbon_mint.key(),
            account: ctx.accounts.user_carbon_token.key(),
            amount: net_credits,
            new_balance: ctx.accounts.user_carbon_token.amount,
        });

        emit!(ConversionSettled {
            conversion_id,
            verifier: ctx.accounts.verifier.key(),
            approved: true,
            credits_to_user: net_credits,
            fee_credits,
            waste_refunded: 0,
        });
    } else {
        ctx.accounts
            .platform_stats
            .reverse_conversion(waste_amount)
            .ok_or(ErrorCode::MathOverflow)?;

        transfer_from_vault_to_user(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.conversion_custody.to_account_info(),
            ctx.accounts.user_waste_token.to_account_info(),
            ctx.accounts.waste_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            waste_amount,
            ctx.accounts.waste_mint.decimals,
            signer_seeds,
        )?;

        emit!(ConversionSettled {
            conversion_id,
            verifier: ctx.accounts.verifier.key(),
            approved: false,
            credits_to_user: 0,
            fee_credits: 0,
            waste_refunded: waste_amount,
        });
    }

    Ok(())
}
