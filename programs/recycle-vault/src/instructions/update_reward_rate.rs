use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

/// Changes a pool's streaming rate.
///
/// The pool is checkpointed at the old rate first, so accrual up to this
/// instant is preserved exactly. A zero rate suspends further emissions
/// without disturbing anything already earned.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct UpdateRewardRate<'info> {
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

pub fn update_reward_rate(ctx: Context<UpdateRewardRate>, pool_id: u64, new_rate: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    require!(
        caller == ctx.accounts.pool.partner || ctx.accounts.global_config.is_admin(&caller),
        ErrorCode::Unauthorized
    );

    let pool = &mut ctx.accounts.pool;
    let block_timestamp = Clock::get()?.unix_timestamp as u64;
    pool.checkpoint(block_timestamp)
        .ok_or(ErrorCode::MathOverflow)?;

    let old_rate = pool.reward_rate;
    pool.reward_rate = new_rate;

    emit!(RewardRateUpdated {
        pool_id,
        old_rate,
        new_rate,
    });

    Ok(())
}
