use anchor_lang::prelude::*;

use crate::math::RewardCalculator;

pub const POOL_SEED: &str = "pool";

/// One staking relationship between a staking token and a reward token,
/// streaming `reward_rate` base units per second to stakers pro rata.
///
/// `reward_per_token_stored` is monotonically non-decreasing while
/// anything is staked and frozen at zero stake; every mutating
/// instruction checkpoints the pool before touching amounts.
#[account]
#[derive(Default, Debug)]
pub struct StakingPool {
    pub bump: u8,
    pub id: u64,
    /// Partner identity that created the pool (the admin for
    /// house pools). Authorized to fund, re-rate, and toggle it.
    pub partner: Pubkey,
    /// Display name surfaced to indexers/frontends.
    pub name: String,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    /// Program-owned custody for staked balance.
    pub stake_vault: Pubkey,
    /// Program-owned custody backing reward payouts.
    pub reward_vault: Pubkey,
    pub total_staked: u64,
    /// Reward base units streamed per second across the pool.
    pub reward_rate: u64,
    /// Cumulative reward per staked base unit, scaled by `PRECISION`.
    pub reward_per_token_stored: u128,
    pub last_update_time: u64,
    /// Seconds a position stays locked after its last stake.
    pub min_staking_period: u64,
    /// Per-user stake cap in base units; 0 = unlimited.
    pub max_stake_per_user: u64,
    pub active: bool,
    /// Lifetime reward-token balance deposited by the partner.
    pub total_funded: u64,
    /// Lifetime reward base units paid out to stakers (net of fees).
    pub total_rewards_paid: u64,
    /// Lifetime reward base units routed to the fee collector.
    pub total_fees_paid: u64,
}

impl StakingPool {
    /// discriminator + bump + id + partner + (4 + 32) name + four Pubkeys
    /// + total_staked + reward_rate + u128 accumulator + three durations/
    /// caps + active + three lifetime counters.
    pub const LEN: usize = 8
        + 1
        + 8
        + 32
        + (4 + crate::MAX_POOL_NAME_LEN)
        + 32 * 4
        + 8 * 2
        + 16
        + 8 * 3
        + 1
        + 8 * 3;

    /// Folds accrued rewards into the stored accumulator and advances the
    /// update timestamp. Mandatory before any stake/rate mutation.
    pub fn checkpoint(&mut self, now: u64) -> Option<()> {
        let elapsed = now.saturating_sub(self.last_update_time);
        if elapsed > 0 {
            self.reward_per_token_stored = RewardCalculator::reward_per_token(
                self.reward_per_token_stored,
                self.reward_rate,
                elapsed,
                self.total_staked,
            )?;
        }
        self.last_update_time = now;
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PRECISION;

    fn pool(rate: u64, staked: u64) -> StakingPool {
        StakingPool {
            reward_rate: rate,
            total_staked: staked,
            ..Default::default()
        }
    }

    #[test]
    fn checkpoint_accrues_and_advances_clock() {
        let mut p = pool(1, 100);
        p.checkpoint(100).unwrap();
        assert_eq!(p.reward_per_token_stored, PRECISION);
        assert_eq!(p.last_update_time, 100);

        // Same-second re-checkpoint is a no-op.
        p.checkpoint(100).unwrap();
        assert_eq!(p.reward_per_token_stored, PRECISION);
    }

    #[test]
    fn checkpoint_freezes_at_zero_stake() {
        let mut p = pool(1_000, 0);
        p.reward_per_token_stored = 7 * PRECISION;
        p.checkpoint(1_000_000).unwrap();
        assert_eq!(p.reward_per_token_stored, 7 * PRECISION);
        assert_eq!(p.last_update_time, 1_000_000);
    }

    #[test]
    fn accumulator_never_decreases_across_checkpoints() {
        let mut p = pool(3, 7);
        let mut last = 0u128;
        for now in [10u64, 11, 50, 50, 1_000] {
            p.checkpoint(now).unwrap();
            assert!(p.reward_per_token_stored >= last);
            last = p.reward_per_token_stored;
        }
    }
}
