use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

/// Vault-wide emergency switch. While paused, stake and unstake entry
/// points are blocked on every pool; reads and claims stay available.
#[derive(Accounts)]
pub struct SetPause<'info> {
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

pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    global_config.paused = paused;

    emit!(PauseSet {
        admin: ctx.accounts.owner.key(),
        paused,
    });

    Ok(())
}
