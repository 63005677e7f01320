use crate::error::ErrorCode;
use crate::math::MintCalculator;
use crate::states::*;
use crate::utils::mint_to_account;
use crate::MAX_LOCATION_TAG_LEN;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Records a waste drop-off and mints waste tokens optimistically.
///
/// Tokens are spendable immediately; a later rejection by a verifier
/// burns them back (`verify_waste`). Unusable-grade material is recorded
/// with zero tokens so the submission trail stays complete.
#[derive(Accounts)]
pub struct SubmitWaste<'info> {
    #[account(mut)]
    pub submitter: Signer<'info>,

    #[account(
        mut,
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
            submitter.key().as_ref()
        ],
        bump,
        payer = submitter,
        space = UserStats::LEN
    )]
    pub user_stats: Account<'info, UserStats>,

    /// The submission record, keyed by the next submission id.
    #[account(
        init,
        seeds = [
            WASTE_SUBMISSION_SEED.as_bytes(),
            global_config.submission_count.to_le_bytes().as_ref()
        ],
        bump,
        payer = submitter,
        space = WasteSubmission::LEN
    )]
    pub submission: Account<'info, WasteSubmission>,

    /// CHECK: Authority PDA (waste mint authority)
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
        token::authority = submitter,
        token::token_program = token_program,
    )]
    pub submitter_waste_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn submit_waste(
    ctx: Context<SubmitWaste>,
    waste_type: WasteType,
    quality: QualityGrade,
    weight_grams: u64,
    evidence_hash: [u8; 32],
    location_tag: String,
) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    require!(
        global_config.submission_enabled,
        ErrorCode::SubmissionsDisabled
    );
    require!(weight_grams > 0, ErrorCode::InvalidInput);
    require!(evidence_hash != [0u8; 32], ErrorCode::InvalidInput);
    require!(
        location_tag.len() <= MAX_LOCATION_TAG_LEN,
        ErrorCode::NameTooLong
    );

    let tokens_to_mint = MintCalculator::waste_tokens(
        weight_grams,
        global_config.waste_multiplier_for(waste_type),
        global_config.quality_multiplier_for(quality),
    )
    .ok_or(ErrorCode::MathOverflow)?;

    let submission_id = global_config.submission_count;
    global_config.submission_count = submission_id
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    let block_timestamp = Clock::get()?.unix_timestamp as u64;

    let submission = &mut ctx.accounts.submission;
    submission.bump = ctx.bumps.submission;
    submission.id = submission_id;
    submission.submitter = ctx.accounts.submitter.key();
    submission.waste_type = waste_type;
    submission.quality = quality;
    submission.weight_grams = weight_grams;
    submission.tokens_minted = tokens_to_mint;
    submission.evidence_hash = evidence_hash;
    submission.location_tag = location_tag;
    submission.timestamp = block_timestamp;
    submission.status = VerificationStatus::Pending;
    submission.verifier = Pubkey::default();

    let user_stats = &mut ctx.accounts.user_stats;
    if user_stats.user == Pubkey::default() {
        user_stats.bump = ctx.bumps.user_stats;
        user_stats.user = ctx.accounts.submitter.key();
    }
    user_stats
        .record_submission(weight_grams, tokens_to_mint)
        .ok_or(ErrorCode::MathOverflow)?;
    ctx.accounts
        .platform_stats
        .record_submission(waste_type, weight_grams, tokens_to_mint)
        .ok_or(ErrorCode::MathOverflow)?;

    if tokens_to_mint > 0 {
        mint_to_account(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.waste_mint.to_account_info(),
            ctx.accounts.submitter_waste_token.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            tokens_to_mint,
            &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
        )?;
        ctx.accounts.submitter_waste_token.reload()?;

        emit!(TokensMinted {
            mint: ctx.accounts.waste_mint.key(),
            account: ctx.accounts.submitter_waste_token.key(),
            amount: tokens_to_mint,
            new_balance: ctx.accounts.submitter_waste_token.amount,
        });
    }

    emit!(WasteSubmitted {
        submission_id,
        submitter: ctx.accounts.submitter.key(),
        waste_type,
        quality,
        weight_grams,
        tokens_minted: tokens_to_mint,
    });

    Ok(())
}
