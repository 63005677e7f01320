use crate::error::ErrorCode;
use crate::states::*;
use crate::MAX_CLAIM_FEE_RATE;
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
            require!(value <= MAX_CLAIM_FEE_RATE, ErrorCode::ValueOutOfRange);
            global_config.claim_fee_rate = value;
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
