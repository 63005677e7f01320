use crate::error::ErrorCode;
use crate::states::*;
use crate::{
    MAX_CARBON_FACTOR, MAX_CONVERSION_FEE_RATE, MAX_QUALITY_MULTIPLIER, MAX_SEASONAL_ADJUSTMENT,
    MAX_WASTE_MULTIPLIER, MIN_SEASONAL_ADJUSTMENT,
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        constraint = global_config.is_admin(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}

pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    match param {
        0 => {
            let new_admin = *ctx
                .remaining_accounts
                .iter()
                .next()
                .ok_or(error!(ErrorCode::MissingRemainingAccount))?
                .key;
            require_keys_neq!(new_admin, Pubkey::default());
            global_config.admin = new_admin;
        }
        1 => {
            let new_collector = *ctx
                .remaining_accounts
                .iter()
                .next()
                .ok_or(error!(ErrorCode::MissingRemainingAccount))?
                .key;
            require_keys_neq!(new_collector, Pubkey::default());
            global_config.fee_collector = new_collector;
        }
        2 => {
            let new_oracle = *ctx
                .remaining_accounts
                .iter()
                .next()
                .ok_or(error!(ErrorCode::MissingRemainingAccount))?
                .key;
            global_config.price_oracle = new_oracle;
        }
        3 => {
            require!(
                value <= MAX_CONVERSION_FEE_RATE,
                ErrorCode::ValueOutOfRange
            );
            global_config.conversion_fee_rate = value;
        }
        4 => {
            global_config.min_conversion_amount = value;
        }
        5 => {
            global_config.verification_threshold = value;
        }
        6 => {
            require!(
                (MIN_SEASONAL_ADJUSTMENT..=MAX_SEASONAL_ADJUSTMENT).contains(&value),
                ErrorCode::ValueOutOfRange
            );
            global_config.seasonal_adjustment = value;
        }
        7 => {
            global_config.submission_enabled = value != 0;
        }
        8 => {
            global_config.conversion_enabled = value != 0;
        }
        _ => return Err(error!(ErrorCode::InvalidParam)),
    }

    emit!(ConfigUpdated {
        admin: ctx.accounts.owner.key(),
        param,
        value,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateRates<'info> {
    #[account(
        mut,
        constraint = global_config.is_admin(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}

/// Updates one entry of the waste-multiplier, quality-multiplier, or
/// carbon-factor table. Each table has its own ceiling; values outside it
/// are rejected with `ValueOutOfRange`.
pub fn update_rates(ctx: Context<UpdateRates>, table: u8, index: u8, value: u64) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    let index = index as usize;
    match table {
        0 => {
            require!(index < WasteType::COUNT, ErrorCode::InvalidParam);
            require!(value <= MAX_WASTE_MULTIPLIER, ErrorCode::ValueOutOfRange);
            global_config.waste_multiplier[index] = value;
        }
        1 => {
            require!(
                index < global_config.quality_multiplier.len(),
                ErrorCode::InvalidParam
            );
            require!(value <= MAX_QUALITY_MULTIPLIER, ErrorCode::ValueOutOfRange);
            global_config.quality_multiplier[index] = value;
        }
        2 => {
            require!(index < WasteType::COUNT, ErrorCode::InvalidParam);
            require!(value <= MAX_CARBON_FACTOR, ErrorCode::ValueOutOfRange);
            global_config.carbon_factor[index] = value;
        }
        _ => return Err(error!(ErrorCode::InvalidParam)),
    }

    emit!(RatesUpdated {
        admin: ctx.accounts.owner.key(),
        table,
        index: index as u8,
        value,
    });

    Ok(())
}
