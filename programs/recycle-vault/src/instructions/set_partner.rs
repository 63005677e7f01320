use crate::error::ErrorCode;
use crate::states::*;
use crate::MAX_POOL_NAME_LEN;
use anchor_lang::prelude::*;

/// Grants or revokes the partner role for an identity. Revocation flips
/// the marker inactive rather than closing it; existing pools created by
/// the partner stay under their control.
#[derive(Accounts)]
pub struct SetPartner<'info> {
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

    /// The identity being granted or revoked.
    pub partner: SystemAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [
            PARTNER_SEED.as_bytes(),
            partner.key().as_ref()
        ],
        bump,
        payer = owner,
        space = PartnerInfo::LEN
    )]
    pub partner_info: Account<'info, PartnerInfo>,

    pub system_program: Program<'info, System>,
}

pub fn set_partner(ctx: Context<SetPartner>, active: bool, name: String) -> Result<()> {
    require!(name.len() <= MAX_POOL_NAME_LEN, ErrorCode::NameTooLong);

    let partner_info = &mut ctx.accounts.partner_info;
    if partner_info.authority == Pubkey::default() {
        partner_info.bump = ctx.bumps.partner_info;
        partner_info.authority = ctx.accounts.partner.key();
    }
    partner_info.active = active;
    partner_info.name = name;

    emit!(PartnerSet {
        partner: ctx.accounts.partner.key(),
        active,
    });

    Ok(())
}
