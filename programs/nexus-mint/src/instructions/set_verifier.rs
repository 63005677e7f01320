use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

/// Grants or revokes the verifier role for an identity. The allow-list is
/// one marker PDA per verifier; revocation flips the marker inactive
/// rather than closing it, so re-granting is idempotent.
#[derive(Accounts)]
pub struct SetVerifier<'info> {
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
    pub verifier: SystemAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [
            VERIFIER_SEED.as_bytes(),
            verifier.key().as_ref()
        ],
        bump,
        payer = owner,
        space = VerifierInfo::LEN
    )]
    pub verifier_info: Account<'info, VerifierInfo>,

    pub system_program: Program<'info, System>,
}

pub fn set_verifier(ctx: Context<SetVerifier>, active: bool) -> Result<()> {
    let verifier_info = &mut ctx.accounts.verifier_info;
    if verifier_info.authority == Pubkey::default() {
        verifier_info.bump = ctx.bumps.verifier_info;
        verifier_info.authority = ctx.accounts.verifier.key();
    }
    verifier_info.active = active;

    emit!(VerifierSet {
        verifier: ctx.accounts.verifier.key(),
        active,
    });

    Ok(())
}
