use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_vault_to_user;
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

/// Emergency controls for protocol administrators.
///
/// Supported operations, selected by `param`:
/// - `0` → Withdraw custodied waste from the conversion custody vault to
///   the admin's waste ATA (`value` base units, `0` = everything).
/// - `1` → Withdraw accumulated fees from the carbon fee vault to the
///   admin's carbon ATA (`value` base units, `0` = everything).
///
/// Last-resort recovery only: balances moved this way bypass the normal
/// conversion accounting.
#[derive(Accounts)]
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
        mut,
        address = global_config.conversion_custody @ ErrorCode::InvalidVault,
    )]
    pub conversion_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = global_config.carbon_fee_vault @ ErrorCode::InvalidVault,
    )]
    pub carbon_fee_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        address = global_config.waste_mint @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub waste_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        address = global_config.carbon_mint @ ErrorCode::InvalidMint,
        mint::token_program = token_program,
    )]
    pub carbon_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Admin's waste ATA (receiver for param `0`). Created on demand.
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = waste_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_waste_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Admin's carbon ATA (receiver for param `1`). Created on demand.
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = carbon_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_carbon_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program (for ATA creations above).
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System Program (payer/rent).
    pub system_program: Program<'info, System>,
}

pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, param: u8, value: u64) -> Result<()> {
    let signer_seeds: &[&[&[u8]]] = &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]];
    match param {
        0 => {
            let amount = if value == 0 {
                ctx.accounts.conversion_custody.amount
            } else {
                value
            };
            transfer_from_vault_to_user(
                ctx.accounts.authority.to_account_info(),
                ctx.accounts.conversion_custody.to_account_info(),
                ctx.accounts.owner_waste_token.to_account_info(),
                ctx.accounts.waste_mint.to_account_info(),
                ctx.accounts.token_program.to_account_info(),
                amount,
                ctx.accounts.waste_mint.decimals,
                signer_seeds,
            )?;
        }
        1 => {
            let amount = if value == 0 {
                ctx.accounts.carbon_fee_vault.amount
            } else {
                value
            };
            transfer_from_vault_to_user(
                ctx.accounts.authority.to_account_info(),
                ctx.accounts.carbon_fee_vault.to_account_info(),
                ctx.accounts.owner_carbon_token.to_account_info(),
                ctx.accounts.carbon_mint.to_account_info(),
                ctx.accounts.token_program.to_account_info(),
                amount,
                ctx.accounts.carbon_mint.decimals,
                signer_seeds,
            )?;
        }
        _ => return Err(ErrorCode::InvalidParam.into()),
    }
    Ok(())
}
