use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::burn_with_authority;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Settles a pending submission.
///
/// Approval only flips the record: the mint already happened at
/// submission time. Rejection burns the minted amount back out of the
/// submitter's account (the authority PDA is the waste mint's permanent
/// delegate) and reverses the running aggregates.
#[derive(Accounts)]
#[instruction(submission_id: u64)]
pub struct VerifyWaste<'info> {
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
            WASTE_SUBMISSION_SEED.as_bytes(),
            submission_id.to_le_bytes().as_ref()
        ],
        bump = submission.bump,
    )]
    pub submission: Account<'info, WasteSubmission>,

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
            submission.submitter.as_ref()
        ],
        bump = user_stats.bump,
    )]
    pub user_stats: Account<'info, UserStats>,

    /// CHECK: Authority PDA (permanent delegate of the waste mint)
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
        token::mint = waste_mint,
        token::authority = submission.submitter,
        token::token_program = token_program,
    )]
    pub submitter_waste_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn verify_waste(ctx: Context<VerifyWaste>, submission_id: u64, approved: bool) -> Result<()> {
    require!(
        verifier_allowed(
            &ctx.accounts.verifier.key(),
            &ctx.accounts.global_config.admin,
            ctx.accounts.verifier_info.as_deref(),
        ),
        ErrorCode::Unauthorized
    );

    let submission = &mut ctx.accounts.submission;
    submission.mark_verified(approved, ctx.accounts.verifier.key())?;

    let mut tokens_burned = 0u64;
    if !approved && submission.tokens_minted > 0 {
        tokens_burned = submission.tokens_minted;

        ctx.accounts
            .user_stats
            .reverse_submission(submission.weight_grams, tokens_burned)
            .ok_or(ErrorCode::MathOverflow)?;
        ctx.accounts
            .platform_stats
            .reverse_submission(submission.waste_type, submission.weight_grams, tokens_burned)
            .ok_or(ErrorCode::MathOverflow)?;

        burn_with_authority(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.waste_mint.to_account_info(),
            ctx.accounts.submitter_waste_token.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            tokens_burned,
            &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
        )?;
        ctx.accounts.submitter_waste_token.reload()?;

        emit!(TokensBurned {
            mint: ctx.accounts.waste_mint.key(),
            account: ctx.accounts.submitter_waste_token.key(),
            amount: tokens_burned,
            new_balance: ctx.accounts.submitter_waste_token.amount,
        });
    }

    emit!(SubmissionVerified {
        submission_id,
        verifier: ctx.accounts.verifier.key(),
        approved,
        tokens_burned,
    });

    Ok(())
}
