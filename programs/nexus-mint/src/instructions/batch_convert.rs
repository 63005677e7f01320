use crate::error::ErrorCode;
use crate::math::{Fees, MintCalculator};
use crate::states::*;
use crate::utils::{burn_with_authority, mint_to_account, transfer_from_user_to_vault};
use crate::{MAX_BATCH_CONVERSIONS, MAX_METHODOLOGY_LEN};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke_signed;
use anchor_lang::solana_program::system_instruction;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Applies the `convert` path over a bounded list of entries in one call.
///
/// Every entry is validated before any balance moves, so one bad entry
/// aborts the whole batch. The per-entry conversion records are created
/// manually from `remaining_accounts` (one writable record PDA per entry,
/// in order), since the entry count is only known at runtime.
#[derive(Accounts)]
pub struct BatchConvert<'info> {
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

struct PricedEntry {
    waste_amount: u64,
    waste_type: WasteType,
    gross_credits: u64,
    fee_credits: u64,
    net_credits: u64,
    auto_verified: bool,
}

pub fn batch_convert<'info>(
    ctx: Context<'_, '_, '_, 'info, BatchConvert<'info>>,
    entries: Vec<ConversionEntry>,
    methodology: String,
) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    require!(
        global_config.conversion_enabled,
        ErrorCode::ConversionsDisabled
    );
    require!(!entries.is_empty(), ErrorCode::InvalidInput);
    require!(
        entries.len() <= MAX_BATCH_CONVERSIONS,
        ErrorCode::BatchTooLarge
    );
    require!(!methodology.is_empty(), ErrorCode::InvalidInput);
    require!(
        methodology.len() <= MAX_METHODOLOGY_LEN,
        ErrorCode::NameTooLong
    );
    require!(
        ctx.remaining_accounts.len() == entries.len(),
        ErrorCode::MissingRemainingAccount
    );

    // Pass 1: price every entry before anything moves.
    let mut priced = Vec::with_capacity(entries.len());
    let mut total_waste = 0u64;
    let mut auto_waste = 0u64;
    let mut auto_net = 0u64;
    let mut auto_fee = 0u64;
    for entry in &entries {
        require!(
            entry.waste_amount >= global_config.min_conversion_amount,
            ErrorCode::BelowMinimum
        );
        let gross_credits = MintCalculator::carbon_credits(
            entry.waste_amount,
            global_config.carbon_factor_for(entry.waste_type),
            global_config.seasonal_adjustment,
        )
        .ok_or(ErrorCode::MathOverflow)?;
        let (net_credits, fee_credits) =
            Fees::split(gross_credits, global_config.conversion_fee_rate)
                .ok_or(ErrorCode::MathOverflow)?;
        let auto_verified = gross_credits < global_config.verification_threshold;

        total_waste = total_waste
            .checked_add(entry.waste_amount)
            .ok_or(ErrorCode::MathOverflow)?;
        if auto_verified {
            auto_waste = auto_waste
                .checked_add(entry.waste_amount)
                .ok_or(ErrorCode::MathOverflow)?;
            auto_net = auto_net
                .checked_add(net_credits)
                .ok_or(ErrorCode::MathOverflow)?;
            auto_fee = auto_fee
                .checked_add(fee_credits)
                .ok_or(ErrorCode::MathOverflow)?;
        }
        priced.push(PricedEntry {
            waste_amount: entry.waste_amount,
            waste_type: entry.waste_type,
            gross_credits,
            fee_credits,
            net_credits,
            auto_verified,
        });
    }
    require!(
        ctx.accounts.user_waste_token.amount >= total_waste,
        ErrorCode::InsufficientBalance
    );

    let block_timestamp = Clock::get()?.unix_timestamp as u64;
    let first_id = global_config.conversion_count;
    global_config.conversion_count = first_id
        .checked_add(entries.len() as u64)
        .ok_or(ErrorCode::MathOverflow)?;

    let user_stats = &mut ctx.accounts.user_stats;
    if user_stats.user == Pubkey::default() {
        user_stats.bump = ctx.bumps.user_stats;
        user_stats.user = ctx.accounts.user.key();
    }

    // Pass 2: materialize the records and the aggregates.
    let rent = Rent::get()?;
    let record_lamports = rent.minimum_balance(ConversionRecord::LEN);
    for (i, entry) in priced.iter().enumerate() {
        let conversion_id = first_id + i as u64;
        let id_bytes = conversion_id.to_le_bytes();
        let (expected_key, record_bump) = Pubkey::find_program_address(
            &[CONVERSION_RECORD_SEED.as_bytes(), id_bytes.as_ref()],
            ctx.program_id,
        );
        let record_info = &ctx.remaining_accounts[i];
        require_keys_eq!(
            record_info.key(),
            expected_key,
            ErrorCode::InvalidConversionAccount
        );

        let record_seeds: &[&[u8]] = &[
            CONVERSION_RECORD_SEED.as_bytes(),
            id_bytes.as_ref(),
            &[record_bump],
        ];
        let create_ix = system_instruction::create_account(
            &ctx.accounts.user.key(),
            &record_info.key(),
            record_lamports,
            ConversionRecord::LEN as u64,
            ctx.program_id,
        );
        invoke_signed(
            &create_ix,
            &[
                ctx.accounts.user.to_account_info(),
                record_info.clone(),
                ctx.accounts.system_program.to_account_info(),
            ],
            &[record_seeds],
        )?;

        let record = ConversionRecord {
            bump: record_bump,
            id: conversion_id,
            user: ctx.accounts.user.key(),
            waste_amount: entry.waste_amount,
            waste_type: entry.waste_type,
            gross_credits: entry.gross_credits,
            fee_credits: entry.fee_credits,
            methodology: methodology.clone(),
            timestamp: block_timestamp,
            status: if entry.auto_verified {
                ConversionStatus::AutoVerified
            } else {
                ConversionStatus::Pending
            },
            verifier: Pubkey::default(),
        };
        record.try_serialize(&mut &mut record_info.data.borrow_mut()[..])?;

        ctx.accounts
            .user_stats
            .record_conversion()
            .ok_or(ErrorCode::MathOverflow)?;
        ctx.accounts
            .platform_stats
            .record_conversion(entry.waste_amount)
            .ok_or(ErrorCode::MathOverflow)?;
        if entry.auto_verified {
            ctx.accounts
                .user_stats
                .record_credits(entry.net_credits)
                .ok_or(ErrorCode::MathOverflow)?;
            ctx.accounts
                .platform_stats
                .record_credits(entry.net_credits, entry.fee_credits)
                .ok_or(ErrorCode::MathOverflow)?;
        }

        emit!(ConversionRequested {
            conversion_id,
            user: ctx.accounts.user.key(),
            waste_type: entry.waste_type,
            waste_amount: entry.waste_amount,
            gross_credits: entry.gross_credits,
            fee_credits: entry.fee_credits,
            auto_verified: entry.auto_verified,
        });
    }

    // One debit for the whole batch, then settle the auto-verified slice.
    transfer_from_user_to_vault(
        ctx.accounts.user.to_account_info(),
        ctx.accounts.user_waste_token.to_account_info(),
        ctx.accounts.conversion_custody.to_account_info(),
        ctx.accounts.waste_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_waste,
        ctx.accounts.waste_mint.decimals,
    )?;

    let signer_seeds: &[&[&[u8]]] = &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]];
    if auto_waste > 0 {
        burn_with_authority(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.waste_mint.to_account_info(),
            ctx.accounts.conversion_custody.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            auto_waste,
            signer_seeds,
        )?;
    }
    if auto_net > 0 {
        mint_to_account(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.carbon_mint.to_account_info(),
            ctx.accounts.user_carbon_token.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            auto_net,
            signer_seeds,
        )?;
    }
    if auto_fee > 0 {
        mint_to_account(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.carbon_mint.to_account_info(),
            ctx.accounts.carbon_fee_vault.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            auto_fee,
            signer_seeds,
        )?;
    }

    Ok(())
}
