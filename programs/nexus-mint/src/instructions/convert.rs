use crate::error::ErrorCode;
use crate::math::{Fees, MintCalculator};
use crate::states::*;
use crate::utils::{burn_with_authority, mint_to_account, transfer_from_user_to_vault};
use crate::MAX_METHODOLOGY_LEN;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Converts waste token balance into carbon credits.
///
/// The waste debit is immediate: the amount moves into the conversion
/// custody vault. Small conversions (gross credits below the
/// verification threshold) settle in the same call; larger ones hold in
/// custody until `verify_conversion` rules on them.
#[derive(Accounts)]
pub struct Convert<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

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
            user.key().as_ref()
        ],
        bump,
        payer = user,
        space = UserStats::LEN
    )]
    pub user_stats: Account<'info, UserStats>,

    /// The conversion record, keyed by the next conversion id.
    #[account(
        init,
        seeds = [
            CONVERSION_RECORD_SEED.as_bytes(),
            global_config.conversion_count.to_le_bytes().as_ref()
        ],
        bump,
        payer = user,
        space = ConversionRecord::LEN
    )]
    pub conversion_record: Account<'info, ConversionRecord>,

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
        token::mint = waste_mint,
        token::authority = user,
        token::token_program = token_program,
    )]
    pub user_waste_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = global_config.conversion_custody @ ErrorCode::InvalidVault,
    )]
    pub conversion_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = carbon_mint,
        token::authority = user,
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

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn convert(
    ctx: Context<Convert>,
    waste_amount: u64,
    waste_type: WasteType,
    methodology: String,
) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    require!(
        global_config.conversion_enabled,
        ErrorCode::ConversionsDisabled
    );
    require!(
        waste_amount >= global_config.min_conversion_amount,
        ErrorCode::BelowMinimum
    );
    require!(!methodology.is_empty(), ErrorCode::InvalidInput);
    require!(
        methodology.len() <= MAX_METHODOLOGY_LEN,
        ErrorCode::NameTooLong
    );
    require!(
        ctx.accounts.user_waste_token.amount >= waste_amount,
        ErrorCode::InsufficientBalance
    );

    let gross_credits = MintCalculator::carbon_credits(
        waste_amount,
        global_config.carbon_factor_for(waste_type),
        global_config.seasonal_adjustment,
    )
    .ok_or(ErrorCode::MathOverflow)?;
    let (net_credits, fee_credits) =
        Fees::split(gross_credits, global_config.conversion_fee_rate)
            .ok_or(ErrorCode::MathOverflow)?;

    let auto_verified = gross_credits < global_config.verification_threshold;

    let conversion_id = global_config.conversion_count;
    global_config.conversion_count = conversion_id
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    let block_timestamp = Clock::get()?.unix_timestamp as u64;

    let record = &mut ctx.accounts.conversion_record;
    record.bump = ctx.bumps.conversion_record;
    record.id = conversion_id;
    record.user = ctx.accounts.user.key();
    record.waste_amount = waste_amount;
    record.waste_type = waste_type;
    record.gross_credits = gross_credits;
    record.fee_credits = fee_credits;
    record.methodology = methodology;
    record.timestamp = block_timestamp;
    record.status = if auto_verified {
        ConversionStatus::AutoVerified
    } else {
        ConversionStatus::Pending
    };
    record.verifier = Pubkey::default();

    let user_stats = &mut ctx.accounts.user_stats;
    if user_stats.user == Pubkey::default() {
        user_stats.bump = ctx.bumps.user_stats;
        user_stats.user = ctx.accounts.user.key();
    }
    user_stats
        .record_conversion()
        .ok_or(ErrorCode::MathOverflow)?;
    ctx.accounts
        .platform_stats
        .record_conversion(waste_amount)
        .ok_or(ErrorCode::MathOverflow)?;
    if auto_verified {
        ctx.accounts
            .user_stats
            .record_credits(net_credits)
            .ok_or(ErrorCode::MathOverflow)?;
        ctx.accounts
            .platform_stats
            .record_credits(net_credits, fee_credits)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    // Debit the waste into custody before any settlement.
    transfer_from_user_to_vault(
        ctx.accounts.user.to_account_info(),
        ctx.accounts.user_waste_token.to_account_info(),
        ctx.accounts.conversion_custody.to_account_info(),
        ctx.accounts.waste_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        waste_amount,
        ctx.accounts.waste_mint.decimals,
    )?;

    if auto_verified {
        let signer_seeds: &[&[&[u8]]] = &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]];

        // Consumed waste leaves circulation permanently.
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
    }

    emit!(ConversionRequested {
        conversion_id,
        user: ctx.accounts.user.key(),
        waste_type,
        waste_amount,
        gross_credits,
        fee_credits,
        auto_verified,
    });

    Ok(())
}
