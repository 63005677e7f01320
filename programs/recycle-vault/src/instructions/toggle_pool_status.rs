use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

/// Flips a pool between Active and Inactive. Inactive pools reject new
/// stake; existing positions keep accruing and may unstake or claim.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct TogglePoolStatus<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [
            POOL_SEED.as_bytes(),
            pool_id.to_le_bytes().as_ref()
        ],
        bump = pool.bump,
    )]
    pub pool: Account<'info, StakingPool>,

    pub system_program: Program<'info, System>,
}

pub fn toggle_pool_status(ctx: Context<TogglePoolStatus>, pool_id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    require!(
        caller == ctx.accounts.pool.partner || ctx.accounts.global_config.is_admin(&caller),
        ErrorCode::Unauthorized
    );

    let pool = &mut ctx.accounts.pool;
    pool.active = !pool.active;

    emit!(PoolStatusToggled {
        pool_id,
        active: pool.active,
    });

    Ok(())
}
